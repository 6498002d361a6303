pub mod complaint;
pub mod map;
pub mod reading;
pub mod user;

pub use complaint::{ComplaintDraft, ComplaintType, GeoPoint, Severity, MAX_COMPLAINT_PHOTOS};
pub use map::{MapData, PollutionSpot, Shelter};
pub use reading::{AirQualityReading, WeatherSnapshot};
pub use user::{RegistrationRequest, UserProfile};
