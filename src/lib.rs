#![doc = include_str!("../README.md")]

pub mod logging;

#[doc(inline)]
pub use trellis_core::{
    ConfigError, Element, Event, HandlerId, LayoutState, NativeElement, NativeView, Orientation,
    Point, Rect, Size, Thickness, Visibility,
};
#[doc(inline)]
pub use trellis_layout::{Border, Grid, SnapPoints, StackPanel, StackPanelConfig};
#[doc(inline)]
pub use trellis_window::{
    ApplicationView, DisplayMetrics, DisplayScale, InsetsSnapshot, NativeWindow, SystemChrome,
    SystemUiFlags, Window, WindowFlags,
};

pub mod prelude {
    //! Commonly used types for building and hosting layouts.
    //!
    //! ```rust
    //! use trellis::prelude::*;
    //!
    //! let panel: StackPanel = StackPanel::vertical();
    //! assert_eq!(panel.orientation(), Orientation::Vertical);
    //! ```
    pub use crate::{
        Element, NativeElement, NativeView, Orientation, Rect, Size, StackPanel, Thickness,
        Visibility, Window,
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug)]
    struct Label {
        width: f32,
        height: f32,
        frame: Rect,
    }

    impl NativeView for Label {
        fn measure(&mut self, _constraint: Size) -> Size {
            Size::new(self.width, self.height)
        }

        fn set_frame(&mut self, frame: Rect) {
            self.frame = frame;
        }

        fn frame_size(&self) -> Size {
            self.frame.size()
        }
    }

    fn label(width: f32, height: f32) -> Box<dyn Element> {
        Box::new(NativeElement::new(Label {
            width,
            height,
            frame: Rect::default(),
        }))
    }

    #[derive(Debug, Default)]
    struct Phone {
        content_views: usize,
    }

    impl NativeWindow for Phone {
        fn set_content_view(&mut self) {
            self.content_views += 1;
        }

        fn attach_insets_listener(&mut self) {}

        fn display_scale(&self) -> DisplayScale {
            DisplayScale::new(3.0).unwrap()
        }

        fn chrome(&self) -> SystemChrome {
            SystemChrome::default()
        }

        fn add_window_flags(&mut self, _flags: WindowFlags) {}
    }

    #[test]
    fn test_window_hosts_stack_panel() {
        let notified = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&notified);

        let mut panel = StackPanel::vertical();
        panel.set_spacing(4.0).unwrap();
        panel.push(label(100.0, 50.0));
        panel.push(label(80.0, 30.0));
        panel
            .vertical_snap_points_changed()
            .subscribe(move |points| log.borrow_mut().push(points.to_vec()));

        let mut window = Window::new(Phone::default());
        window.set_content(Box::new(panel));
        window.raise_native_size_changed(1080, 1920);

        let content = window.content().unwrap();
        assert_eq!(content.bounds(), Rect::from_size(Size::new(360.0, 640.0)));
        assert_eq!(window.platform().content_views, 1);
        // Snap points do not depend on the cross-axis size.
        assert_eq!(notified.borrow().last().unwrap(), &[50.0, 84.0]);
    }
}
