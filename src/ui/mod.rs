pub mod devices;
pub mod invitation;
pub mod mvi;
pub mod view_state;

pub use devices::DevicesViewModel;
pub use invitation::InvitationViewModel;
