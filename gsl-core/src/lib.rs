pub mod climate;
pub mod elevation;
pub mod month_key;
pub mod observation;
pub mod region;
pub mod series;
