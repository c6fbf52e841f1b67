//! Clock Port - the only source of "today" for the application layer.

use chrono::NaiveDate;

pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}
