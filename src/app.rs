use gtk4::prelude::*;
use gtk4::{gio, Application};

use crate::config::ViewerConfig;
use crate::ui::MainWindow;

const APP_ID: &str = "org.imgwatch.ImgWatch";

pub struct ImgWatchApp {
    app: Application,
}

impl ImgWatchApp {
    pub fn new(config: ViewerConfig) -> Self {
        let app = Application::builder()
            .application_id(APP_ID)
            .flags(gio::ApplicationFlags::NON_UNIQUE)
            .build();

        app.connect_activate(move |app| {
            let window = MainWindow::new(app, &config);
            window.present();
            // Keep the window alive by storing it on the Application.
            unsafe {
                app.set_data("main-window", window);
            }
        });

        Self { app }
    }

    pub fn run(&self) -> i32 {
        // clap already consumed argv; don't hand GTK the real arguments.
        self.app.run_with_args::<&str>(&[]).into()
    }
}
