//! Cisco CallManager entities on top of the AXL object mapper.
//!
//! Every entity is a thin typed wrapper around [`axl_model::Model`] and
//! dereferences to it, so field access and the lifecycle calls
//! (`create`, `update`, `remove`, `reload`) are the same for all types.
//! Shared behaviour is layered on as capabilities:
//! - [`Templated`] — build new records from an existing one
//! - [`LineAssociation`] — attach directory numbers to devices and profiles
//!
//! A few settings are only reachable through the database; [`CcmSql`]
//! holds those statements.

#[macro_use]
mod macros;

mod entities;
mod lines;
mod phone;
mod remote_destination;
mod sql;
mod template;
mod time_schedule;
mod user;

pub use axl_model::Entity;
pub use entities::{
    AppUser, CallPickupGroup, Css, CtiRoutingPoint, DevicePool, DeviceProfile, HuntList, HuntPilot,
    Line, LineGroup, Phone, PhoneButtonTemplate, RemoteDestination, RemoteDestinationProfile,
    RoutePartition, TimePeriod, TimeSchedule, TodAccess, TransPattern, User, UserGroup,
    VoiceMailPilot, VoiceMailProfile,
};
pub use lines::LineAssociation;
pub use phone::{BFCP_FIELD, SIP};
pub use sql::{CcmSql, CupsLicense};
pub use template::{REMOTE_DESTINATION_PROFILE_CLASS, Templated};
pub use user::MobilityPhones;
