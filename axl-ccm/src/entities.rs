//! The CallManager entity types.
//!
//! Types with extra behaviour get it from the capability modules
//! (`template`, `lines`) or from their own module (`user`, `phone`, ...).

define_entity!(
    /// Application user.
    AppUser
);
define_entity!(CallPickupGroup);
define_entity!(
    /// Calling search space.
    Css
);
define_entity!(CtiRoutingPoint);
define_entity!(DevicePool);
define_entity!(
    /// Extension mobility profile.
    DeviceProfile
);
define_entity!(HuntList);
define_entity!(HuntPilot);
define_entity!(
    /// Directory number.
    Line
);
define_entity!(LineGroup);
define_entity!(Phone);
define_entity!(PhoneButtonTemplate);
define_entity!(
    /// Mobile or external number reachable through single number reach.
    RemoteDestination
);
define_entity!(RemoteDestinationProfile);
define_entity!(RoutePartition);
define_entity!(TimePeriod);
define_entity!(TimeSchedule);
define_entity!(
    /// Time-of-day access rule.
    TodAccess
);
define_entity!(
    /// Translation pattern.
    TransPattern
);
define_entity!(
    /// End user.
    User
);
define_entity!(UserGroup);
define_entity!(VoiceMailPilot);
define_entity!(VoiceMailProfile);
