// Frame presentation widget for imgwatch
// Paints the letterboxed current (or scrubbed) frame and the bottom history
// thumbnail strip in a single snapshot pass.

use gdk4::{MemoryFormat, MemoryTexture, Texture, RGBA};
use glib::Object;
use gtk4::graphene;
use gtk4::prelude::*;
use gtk4::subclass::prelude::*;
use std::cell::RefCell;

use crate::frame::Frame;
use crate::layout::{fit_rect, thumbnail_rect, FitRect};
use crate::state::ViewerState;

/// Height of the history scrub strip at the bottom of the viewport.
pub const STRIP_HEIGHT: f64 = 96.0;

/// A decoded frame uploaded as a GPU texture, with its source dimensions
/// kept for the compositor.
pub struct ShownFrame {
    width: u32,
    height: u32,
    texture: Texture,
}

mod imp {
    use super::*;

    #[derive(Default)]
    pub struct FrameViewInner {
        pub state: RefCell<ViewerState<ShownFrame>>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for FrameViewInner {
        const NAME: &'static str = "ImgWatchFrameView";
        type Type = super::FrameView;
        type ParentType = gtk4::Widget;
    }

    impl ObjectImpl for FrameViewInner {}

    impl WidgetImpl for FrameViewInner {
        fn snapshot(&self, snapshot: &gtk4::Snapshot) {
            let widget = self.obj();
            let width = widget.width() as f64;
            let height = widget.height() as f64;
            if width <= 0.0 || height <= 0.0 {
                return;
            }

            snapshot.append_color(
                &RGBA::BLACK,
                &graphene::Rect::new(0.0, 0.0, width as f32, height as f32),
            );

            let state = self.state.borrow();

            // Before the first decode there is only the black backdrop.
            if let Some(frame) = state.shown() {
                let dest = fit_rect(frame.width, frame.height, width, height);
                snapshot.append_texture(&frame.texture, &to_graphene(&dest));
            }

            let history = state.history();
            if history.is_empty() || height <= STRIP_HEIGHT {
                return;
            }
            for (index, entry) in history.iter().enumerate() {
                let slot = thumbnail_rect(index, history.capacity(), width, height, STRIP_HEIGHT);
                // Stretched into the slot so the strip stays uniform.
                snapshot.append_texture(&entry.texture, &to_graphene(&slot));
            }
        }
    }
}

glib::wrapper! {
    pub struct FrameView(ObjectSubclass<imp::FrameViewInner>)
        @extends gtk4::Widget,
        @implements gtk4::Accessible, gtk4::Buildable, gtk4::ConstraintTarget;
}

impl FrameView {
    pub fn new(history_capacity: usize) -> Self {
        let view: Self = Object::builder().build();
        view.set_hexpand(true);
        view.set_vexpand(true);
        view.imp().state.replace(ViewerState::new(history_capacity));
        view
    }

    /// Upload a decoded frame and make it current. The previously shown
    /// frame moves into the history ring; ownership transfers in, nothing
    /// is aliased.
    pub fn install_frame(&self, frame: Frame) {
        let texture = upload_texture(&frame);
        self.imp().state.borrow_mut().install(ShownFrame {
            width: frame.width(),
            height: frame.height(),
            texture,
        });
        self.queue_draw();
    }

    /// Update the scrub selection, redrawing only when it actually changed.
    pub fn set_scrub(&self, selection: Option<usize>) {
        if self.imp().state.borrow_mut().set_scrub(selection) {
            self.queue_draw();
        }
    }

    pub fn history_capacity(&self) -> usize {
        self.imp().state.borrow().history().capacity()
    }
}

/// Create a GDK texture from a frame's RGBA data.
fn upload_texture(frame: &Frame) -> Texture {
    let bytes = glib::Bytes::from(frame.pixels());
    MemoryTexture::new(
        frame.width() as i32,
        frame.height() as i32,
        MemoryFormat::R8g8b8a8,
        &bytes,
        (frame.width() * 4) as usize,
    )
    .upcast()
}

fn to_graphene(rect: &FitRect) -> graphene::Rect {
    graphene::Rect::new(
        rect.x as f32,
        rect.y as f32,
        rect.width as f32,
        rect.height as f32,
    )
}
