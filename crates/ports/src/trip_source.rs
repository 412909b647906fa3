// crates/ports/src/trip_source.rs
use absence_days_shared_kernel::Result;
use serde::{Deserialize, Serialize};

/// Raw row shape supplied by a trip source.
///
/// All fields are string-or-null exactly as the source provides them; date
/// parsing and row dropping happen in the application layer, never in the
/// calculator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripRowDto {
    pub departure: Option<String>,
    pub return_date: Option<String>,
    pub note: Option<String>,
}

/// Port for fetching trip rows from an external tabular source.
pub trait TripSource: Send + Sync {
    fn fetch_rows(&self) -> Result<Vec<TripRowDto>>;
}

impl<T: TripSource + ?Sized> TripSource for Box<T> {
    fn fetch_rows(&self) -> Result<Vec<TripRowDto>> {
        (**self).fetch_rows()
    }
}
