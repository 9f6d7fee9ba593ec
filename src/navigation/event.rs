use std::fmt;

use serde::{Deserialize, Serialize};

/// Screens the navigation host can display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Destination {
    Home,
    SignIn,
    InvitationCode,
    Onboarding,
    PersonalInfo,
    HealthRecords,
    DeviceList,
    DeviceDetail { address: String },
    Settings,
}

impl Destination {
    /// Stable route string, used in logs and CLI output.
    pub fn route(&self) -> String {
        match self {
            Destination::Home => "home".to_string(),
            Destination::SignIn => "auth/sign-in".to_string(),
            Destination::InvitationCode => "auth/invitation".to_string(),
            Destination::Onboarding => "onboarding".to_string(),
            Destination::PersonalInfo => "profile".to_string(),
            Destination::HealthRecords => "health/records".to_string(),
            Destination::DeviceList => "devices".to_string(),
            Destination::DeviceDetail { address } => format!("devices/{}", address),
            Destination::Settings => "settings".to_string(),
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.route())
    }
}

/// A desired screen transition.
///
/// Events are plain values: two events describing the same transition
/// compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "action", content = "destination", rename_all = "snake_case")]
pub enum NavigationEvent {
    /// Push a destination on top of the back stack.
    NavigateTo(Destination),
    /// Clear the back stack and make the destination the new root.
    ReplaceAll(Destination),
    /// Pop the current destination. Ignored at the root.
    Back,
}

impl fmt::Display for NavigationEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationEvent::NavigateTo(d) => write!(f, "navigate_to({})", d),
            NavigationEvent::ReplaceAll(d) => write!(f, "replace_all({})", d),
            NavigationEvent::Back => f.write_str("back"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_detail_route_carries_address() {
        let dest = Destination::DeviceDetail {
            address: "AA:BB:CC:DD:EE:FF".to_string(),
        };
        assert_eq!(dest.route(), "devices/AA:BB:CC:DD:EE:FF");
    }

    #[test]
    fn events_are_value_compared() {
        let a = NavigationEvent::NavigateTo(Destination::Settings);
        let b = NavigationEvent::NavigateTo(Destination::Settings);
        assert_eq!(a, b);
        assert_ne!(a, NavigationEvent::ReplaceAll(Destination::Settings));
    }

    #[test]
    fn event_serializes_with_tagged_destination() {
        let event = NavigationEvent::ReplaceAll(Destination::Onboarding);
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["action"], "replace_all");
        assert_eq!(json["destination"]["screen"], "onboarding");
    }
}
