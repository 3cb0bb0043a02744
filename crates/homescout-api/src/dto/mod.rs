pub mod request;
pub mod response;

pub use request::{ListingsQuery, PredictRequest};
pub use response::{
    Bounds, HealthResponse, HouseTypeOption, OptionsResponse, PredictResponse, PriceResponse,
};
