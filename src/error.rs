use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Non-finite heading {heading} for segment {index}")]
    NonFiniteHeading { index: usize, heading: f64 },
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("GeoJSON error: {0}")]
    Geojson(#[from] geojson::Error),
}
