mod library_vm;
mod markdown_vm;
mod practice_vm;

pub use library_vm::{
    FolderVm, GeneratedSetVm, card_count_label, map_folder, map_generated_set,
};
pub use markdown_vm::{looks_like_markdown, markdown_to_html, sanitize_html};
pub use practice_vm::PracticeCursor;
