// Main window for imgwatch
// GTK4 ApplicationWindow hosting the frame view, the reload timer, fetch
// completion handling, and the keyboard/mouse surface.

use gdk4::prelude::*;
use gdk4::Display;
use gtk4::gdk::Key;
use gtk4::prelude::*;
use gtk4::{
    Application, ApplicationWindow, CssProvider, EventControllerKey, EventControllerMotion,
    GestureClick, GestureDrag, STYLE_PROVIDER_PRIORITY_APPLICATION,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::frame_view::{FrameView, STRIP_HEIGHT};
use crate::config::ViewerConfig;
use crate::fetch::{FetchOutcome, FetchWorker};
use crate::frame::Frame;
use crate::layout::map_pointer;
use crate::persist::FramePersister;
use crate::scheduler::ReloadScheduler;

const DEFAULT_WIDTH: i32 = 1280;
const DEFAULT_HEIGHT: i32 = 720;

/// Solid black backdrop so letterbox margins stay black even before the
/// first frame arrives.
const WINDOW_CSS: &str = "window { background-color: black; }";

fn load_css() {
    let provider = CssProvider::new();
    provider.load_from_string(WINDOW_CSS);
    if let Some(display) = Display::default() {
        gtk4::style_context_add_provider_for_display(
            &display,
            &provider,
            STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}

/// Main window of the viewer.
pub struct MainWindow {
    window: ApplicationWindow,
    view: FrameView,
    scheduler: RefCell<ReloadScheduler>,
    fetcher: FetchWorker,
    persister: FramePersister,
}

impl MainWindow {
    pub fn new(app: &Application, config: &ViewerConfig) -> Rc<Self> {
        load_css();

        let view = FrameView::new(config.history_capacity);
        let window = ApplicationWindow::builder()
            .application(app)
            .title("imgwatch")
            .default_width(DEFAULT_WIDTH)
            .default_height(DEFAULT_HEIGHT)
            .child(&view)
            .build();

        let persister = match config.output_dir.clone() {
            Some(dir) => match FramePersister::with_directory(dir) {
                Ok(persister) => persister,
                Err(err) => {
                    warn!(error = ?err, "disabling frame persistence");
                    FramePersister::disabled()
                }
            },
            None => FramePersister::disabled(),
        };

        let (outcome_tx, outcome_rx) = async_channel::unbounded();
        let fetcher = FetchWorker::spawn(config.url.clone(), outcome_tx);

        let main_window = Rc::new(Self {
            window,
            view,
            scheduler: RefCell::new(ReloadScheduler::new()),
            fetcher,
            persister,
        });

        main_window.connect_outcome_pump(outcome_rx);
        main_window.connect_reload_timer(config.interval);
        main_window.connect_input();

        if config.fullscreen {
            main_window.enter_fullscreen();
        }

        info!(url = %config.url, interval = ?config.interval, "watching image source");
        // First fetch goes out immediately; the timer handles the rest.
        main_window.request_reload();

        main_window
    }

    pub fn present(&self) {
        self.window.present();
    }

    /// Drain fetch outcomes on the main loop; every frame installation and
    /// scheduler transition happens on this one thread.
    fn connect_outcome_pump(self: &Rc<Self>, outcome_rx: async_channel::Receiver<FetchOutcome>) {
        let weak = Rc::downgrade(self);
        glib::spawn_future_local(async move {
            while let Ok(outcome) = outcome_rx.recv().await {
                let Some(window) = weak.upgrade() else { break };
                window.on_fetch_complete(outcome);
            }
        });
    }

    fn connect_reload_timer(self: &Rc<Self>, interval: Duration) {
        let weak = Rc::downgrade(self);
        glib::timeout_add_local(interval, move || match weak.upgrade() {
            Some(window) => {
                window.request_reload();
                glib::ControlFlow::Continue
            }
            None => glib::ControlFlow::Break,
        });
    }

    fn connect_input(self: &Rc<Self>) {
        let key_controller = EventControllerKey::new();
        let weak = Rc::downgrade(self);
        key_controller.connect_key_pressed(move |_, keyval, _, _| {
            let Some(window) = weak.upgrade() else {
                return glib::Propagation::Proceed;
            };
            window.on_key_pressed(keyval)
        });
        self.window.add_controller(key_controller);

        // Double-click toggles fullscreen.
        let click = GestureClick::new();
        let weak = Rc::downgrade(self);
        click.connect_pressed(move |_, n_press, _, _| {
            if n_press == 2 {
                if let Some(window) = weak.upgrade() {
                    window.toggle_fullscreen();
                }
            }
        });
        self.view.add_controller(click);

        // Left-drag anywhere moves the window.
        let drag = GestureDrag::new();
        let weak = Rc::downgrade(self);
        drag.connect_drag_begin(move |gesture, x, y| {
            if let Some(window) = weak.upgrade() {
                window.begin_window_move(gesture, x, y);
            }
        });
        self.view.add_controller(drag);

        // Pointer motion inside the bottom strip scrubs through history.
        let motion = EventControllerMotion::new();
        let weak = Rc::downgrade(self);
        motion.connect_motion(move |_, x, y| {
            if let Some(window) = weak.upgrade() {
                window.on_pointer_motion(x, y);
            }
        });
        let weak = Rc::downgrade(self);
        motion.connect_leave(move |_| {
            if let Some(window) = weak.upgrade() {
                window.view.set_scrub(None);
            }
        });
        self.view.add_controller(motion);

        // Ctrl-C closes the viewer.
        let weak = Rc::downgrade(self);
        glib::unix_signal_add_local(libc::SIGINT, move || {
            if let Some(window) = weak.upgrade() {
                window.window.close();
            }
            glib::ControlFlow::Break
        });
    }

    /// Coalescing entry point: issues a fetch only when none is in flight.
    fn request_reload(&self) {
        if self.scheduler.borrow_mut().request_reload() {
            self.fetcher.request();
        }
    }

    /// Handle one fetch outcome, then settle the scheduler and replay a
    /// coalesced reload if one arrived meanwhile. Transport and decode
    /// failures leave the display untouched.
    fn on_fetch_complete(&self, outcome: FetchOutcome) {
        match outcome {
            Ok(bytes) => match Frame::decode(&bytes) {
                Ok(frame) => {
                    self.view.install_frame(frame);
                    match self.persister.save(&bytes) {
                        Ok(Some(path)) => debug!(path = %path.display(), "saved frame"),
                        Ok(None) => {}
                        Err(err) => warn!(error = ?err, "failed to persist frame"),
                    }
                }
                Err(err) => debug!(error = ?err, "discarding undecodable frame"),
            },
            Err(err) => debug!(error = ?err, "fetch failed, keeping last frame"),
        }
        if self.scheduler.borrow_mut().finish() {
            self.fetcher.request();
        }
    }

    fn on_key_pressed(&self, keyval: Key) -> glib::Propagation {
        if keyval == Key::F11 || keyval == Key::f || keyval == Key::F {
            self.toggle_fullscreen();
            glib::Propagation::Stop
        } else if keyval == Key::Escape {
            if self.window.is_fullscreen() {
                self.leave_fullscreen();
            }
            glib::Propagation::Stop
        } else if keyval == Key::q || keyval == Key::Q {
            self.window.close();
            glib::Propagation::Stop
        } else {
            glib::Propagation::Proceed
        }
    }

    fn on_pointer_motion(&self, x: f64, y: f64) {
        let selection = map_pointer(
            x,
            y,
            self.view.width() as f64,
            self.view.height() as f64,
            STRIP_HEIGHT,
            self.view.history_capacity(),
        );
        self.view.set_scrub(selection);
    }

    fn begin_window_move(&self, gesture: &GestureDrag, x: f64, y: f64) {
        let Some(surface) = self.window.surface() else {
            return;
        };
        let Ok(toplevel) = surface.downcast::<gdk4::Toplevel>() else {
            return;
        };
        let Some(device) = gesture.current_event_device() else {
            return;
        };
        toplevel.begin_move(
            &device,
            gesture.current_button() as i32,
            x,
            y,
            gesture.current_event_time(),
        );
    }

    fn toggle_fullscreen(&self) {
        if self.window.is_fullscreen() {
            self.leave_fullscreen();
        } else {
            self.enter_fullscreen();
        }
    }

    /// Fullscreen hides the pointer; leaving restores it.
    fn enter_fullscreen(&self) {
        self.window
            .set_cursor(gdk4::Cursor::from_name("none", None).as_ref());
        self.window.fullscreen();
    }

    fn leave_fullscreen(&self) {
        self.window.set_cursor(None);
        self.window.unfullscreen();
    }
}
