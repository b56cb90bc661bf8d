//! Modal visibility shared by the composer and the page around it.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    pub show_new_post_modal: bool,
    pub show_discard_modal: bool,
}
