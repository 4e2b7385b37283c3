pub mod chatbot_test;
pub mod indoor_detail;
pub mod indoors;
pub mod panel;

pub use chatbot_test::ChatbotTest;
pub use indoor_detail::IndoorDetailPage;
pub use indoors::Indoors;
pub use panel::Panel;
