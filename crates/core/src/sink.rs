//! The presentation seam between the renderer and whatever shows its frames.

use crate::error::FieldError;
use crate::frame::FrameBuffer;

/// Receives each rendered frame, e.g. to convert it to RGB and display or save it.
///
/// Closures of the form `FnMut(&FrameBuffer) -> Result<(), FieldError>` are
/// consumers too.
pub trait FrameConsumer {
    /// Presents one frame. An error stops the animation that produced it.
    fn accept(&mut self, frame: &FrameBuffer) -> Result<(), FieldError>;
}

impl<F> FrameConsumer for F
where
    F: FnMut(&FrameBuffer) -> Result<(), FieldError>,
{
    fn accept(&mut self, frame: &FrameBuffer) -> Result<(), FieldError> {
        self(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Hsv;

    #[test]
    fn closure_acts_as_consumer() {
        let frame = FrameBuffer::filled(2, 2, Hsv::new(0, 0, 0)).unwrap();
        let mut seen = 0;
        let mut sink = |f: &FrameBuffer| -> Result<(), FieldError> {
            seen += f.pixels().len();
            Ok(())
        };
        sink.accept(&frame).unwrap();
        sink.accept(&frame).unwrap();
        assert_eq!(seen, 8);
    }

    #[test]
    fn consumer_is_object_safe() {
        let frame = FrameBuffer::filled(1, 1, Hsv::new(0, 0, 0)).unwrap();
        let mut failing =
            |_: &FrameBuffer| -> Result<(), FieldError> { Err(FieldError::Io("closed".into())) };
        let sink: &mut dyn FrameConsumer = &mut failing;
        assert!(matches!(sink.accept(&frame), Err(FieldError::Io(_))));
    }
}
