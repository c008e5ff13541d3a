pub mod element;
pub mod event;
pub mod html;
pub mod text;

pub use element::{
    collect_clickable, find_element, find_element_mut, remove_all_children, Content, Element, Tag,
};
pub use event::{Event, MouseButton};
pub use html::{escape_html, write_element};
