//! CSV order-stream loader.
//!
//! # CSV format
//!
//! One row per order.  `created` is the tick at which the order appears;
//! rows with `created = 0` are present before the first auction.
//!
//! ```csv
//! depot,pickup_x,pickup_y,dropoff_x,dropoff_y,created
//! 0,22.5,18.0,61.2,40.7,0
//! 1,79.1,25.3,12.0,88.8,0
//! 2,48.0,83.4,90.1,10.5,3
//! ```
//!
//! Depot indices are checked when the order is added to the fleet, not here.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use drt_core::{DrtError, DrtResult};

/// One row of an order-stream CSV.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct OrderRecord {
    pub depot:     u16,
    pub pickup_x:  f64,
    pub pickup_y:  f64,
    pub dropoff_x: f64,
    pub dropoff_y: f64,
    pub created:   u64,
}

/// Load an order stream from a CSV file.
pub fn load_orders_csv(path: &Path) -> DrtResult<Vec<OrderRecord>> {
    let file = std::fs::File::open(path)?;
    load_orders_reader(file)
}

/// Like [`load_orders_csv`] but accepts any `Read` source.
pub fn load_orders_reader<R: Read>(reader: R) -> DrtResult<Vec<OrderRecord>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    csv_reader
        .deserialize::<OrderRecord>()
        .enumerate()
        .map(|(i, row)| row.map_err(|e| DrtError::Parse(format!("order row {}: {e}", i + 1))))
        .collect()
}
