//! Custom widget components

mod flight_list;
mod header;
mod legend;
mod price_slider;
mod search_form;
mod seat_filters;
mod seat_grid;
mod selection_panel;
mod status_bar;

pub use flight_list::FlightList;
pub use header::MainHeader;
pub use legend::Legend;
pub use price_slider::PriceSlider;
pub use search_form::TextField;
pub use seat_filters::SeatFilterPanel;
pub use seat_grid::SeatGrid;
pub use selection_panel::SelectionPanel;
pub use status_bar::StatusBar;
