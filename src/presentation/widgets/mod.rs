mod footer_bar;
mod input;
mod option_list;
mod result_panel;
mod status_bar;
mod wheel;

pub use footer_bar::{FocusContext, FooterBar, FooterBarStyle};
pub use input::TextInput;
pub use option_list::{OptionList, OptionListStyle};
pub use result_panel::{ResultPanel, ResultPanelStyle};
pub use status_bar::{StatusBar, StatusBarStyle};
pub use wheel::{Wheel, WheelLayout, WheelStyle, slice_color};
