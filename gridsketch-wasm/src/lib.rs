use wasm_bindgen::prelude::*;
mod api;
mod error;
mod interop;

/// Browser-facing editor: the core session plus the canvas viewport it is drawn through.
#[wasm_bindgen]
pub struct Editor {
    pub(crate) inner: gridsketch::Editor,
    pub(crate) view: gridsketch::GridView,
}

impl Editor {
    pub fn rs_new(width: f32, height: f32) -> Editor {
        Editor { inner: gridsketch::Editor::new(), view: gridsketch::GridView::new(width, height) }
    }

    pub fn rs_with_config(width: f32, height: f32, cfg: gridsketch::Config) -> Editor {
        Editor {
            inner: gridsketch::Editor::with_config(cfg.editor),
            view: gridsketch::GridView::with_config(width, height, cfg.view),
        }
    }
}
