//! Domain models
//!
//! Entities and API payloads shared between the reward server and clients.
//! Wire names are camelCase to match the dashboard frontends; database rows
//! derive `sqlx::FromRow` behind the `db` feature.

pub mod offer;
pub mod redemption;
pub mod restaurant;
pub mod slider;
pub mod user;

pub use offer::{Offer, OfferCreate, OfferUpdate};
pub use redemption::{LedgerStats, Redemption, RedemptionDetail, RedemptionRecord};
pub use restaurant::{
    Restaurant, RestaurantCreate, RestaurantCustomer, RestaurantStatus, RestaurantUpdate,
};
pub use slider::{Slider, SliderCreate, SliderType, SliderUpdate};
pub use user::{
    AvailablePoints, PointBalance, PointsUpdate, PointsUpdateEntry, User, UserDocument,
    UserRegister, UserType,
};
