//! Bounded point series with oldest-first eviction.

use crate::models::Point;
use serde::Serialize;
use std::collections::VecDeque;

/// An ordered point series. Append-only except for window trimming,
/// which removes only from the front (oldest points).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Series {
    points: VecDeque<Point>,
}

impl Series {
    pub fn push(&mut self, point: Point) {
        self.points.push_back(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }

    pub fn get(&self, idx: usize) -> Option<&Point> {
        self.points.get(idx)
    }

    pub fn front(&self) -> Option<&Point> {
        self.points.front()
    }

    pub fn back(&self) -> Option<&Point> {
        self.points.back()
    }

    /// Trim to at most `max_length` points by evicting the oldest
    /// excess from the front. No-op at or under the limit.
    pub fn trim_to(&mut self, max_length: usize) {
        while self.points.len() > max_length {
            self.points.pop_front();
        }
    }
}

impl Extend<Point> for Series {
    fn extend<T: IntoIterator<Item = Point>>(&mut self, iter: T) {
        self.points.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a Point;
    type IntoIter = std::collections::vec_deque::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
