use crate::shared::frame::Frame;

/// Supplies still frames to enrollment and matching.
///
/// `current_frame` hands back the most recently acquired frame; nothing is
/// buffered or queued, and a source whose device is unavailable reports an
/// error instead of blocking. A live camera would sit behind this same
/// seam; the shell owning it decides when to ask for a frame.
pub trait FrameSource {
    fn current_frame(&mut self) -> Result<Frame, Box<dyn std::error::Error>>;
}
