mod central_panel;
mod slide_list;
mod tools_panel;

pub use central_panel::central_panel;
pub use slide_list::slide_list_panel;
pub use tools_panel::tools_panel;
