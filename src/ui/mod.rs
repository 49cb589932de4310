pub mod frame_view;
pub mod window;

pub use window::MainWindow;
