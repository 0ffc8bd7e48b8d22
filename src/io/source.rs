//! Frame acquisition from still images, animations and image sequences
//!
//! A decomposer pulls frames through the `FrameSource` trait. Sources built
//! from files never fail on construction: unreadable input leaves the source
//! not ready, which the decomposer reports as a fatal condition.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder, DynamicImage, Frames, RgbImage};
use log::{error, warn};

use crate::io::error::{DecomposeError, Result};
use crate::spatial::frame::{Dimension, Frame};
use crate::spatial::pixel::Pixel;

/// File extensions read as still frames from a sequence directory
pub const SEQUENCE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

/// Supplier of frames for a decomposition run
pub trait FrameSource {
    /// Check whether the source can deliver frames
    fn is_ready(&self) -> bool;

    /// Deliver the next frame, `None` once the sequence is exhausted
    fn next_frame(&mut self) -> Option<Frame>;
}

impl<S: FrameSource + ?Sized> FrameSource for Box<S> {
    fn is_ready(&self) -> bool {
        (**self).is_ready()
    }

    fn next_frame(&mut self) -> Option<Frame> {
        (**self).next_frame()
    }
}

impl<S: FrameSource + ?Sized> FrameSource for &mut S {
    fn is_ready(&self) -> bool {
        (**self).is_ready()
    }

    fn next_frame(&mut self) -> Option<Frame> {
        (**self).next_frame()
    }
}

/// How frames are acquired from a path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum AcquisitionMode {
    /// Animated GIF, or a directory of still frames in filename order
    #[default]
    Video,
    /// Single still image analyzed as one frame
    Image,
}

/// Open a frame source for the given acquisition mode
pub fn open_source(mode: AcquisitionMode, path: &Path) -> Box<dyn FrameSource> {
    match mode {
        AcquisitionMode::Video => Box::new(VideoSource::open(path)),
        AcquisitionMode::Image => Box::new(ImageSource::open(path)),
    }
}

/// Convert a decoded RGB image into a frame
///
/// # Errors
///
/// Returns `InvalidSourceData` if either image dimension exceeds the frame limit
pub fn frame_from_image(image: &RgbImage) -> Result<Frame> {
    let width = to_dimension(image.width(), "width")?;
    let height = to_dimension(image.height(), "height")?;

    let mut frame = Frame::new(width, height);
    for (x, y, rgb) in image.enumerate_pixels() {
        frame.set(x as Dimension, y as Dimension, Pixel::from(*rgb))?;
    }

    Ok(frame)
}

fn to_dimension(value: u32, name: &str) -> Result<Dimension> {
    Dimension::try_from(value).map_err(|err| DecomposeError::InvalidSourceData {
        reason: format!("image {name} {value} exceeds {}: {err}", Dimension::MAX),
    })
}

fn load_image(path: &Path) -> Result<RgbImage> {
    image::open(path)
        .map(DynamicImage::into_rgb8)
        .map_err(|e| DecomposeError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Single still image delivered as exactly one frame
pub struct ImageSource {
    image: Option<RgbImage>,
    consumed: bool,
}

impl ImageSource {
    /// Decode the image at `path`, leaving the source not ready on failure
    pub fn open(path: &Path) -> Self {
        let image = load_image(path)
            .inspect_err(|err| warn!("{err}"))
            .ok();

        Self {
            image,
            consumed: false,
        }
    }

    /// Wrap an already decoded image
    pub const fn from_image(image: RgbImage) -> Self {
        Self {
            image: Some(image),
            consumed: false,
        }
    }
}

impl FrameSource for ImageSource {
    fn is_ready(&self) -> bool {
        self.image
            .as_ref()
            .is_some_and(|image| image.width() != 0 && image.height() != 0)
    }

    fn next_frame(&mut self) -> Option<Frame> {
        if !self.is_ready() || self.consumed {
            return None;
        }
        self.consumed = true;

        let image = self.image.as_ref()?;
        frame_from_image(image)
            .inspect_err(|err| error!("{err}"))
            .ok()
    }
}

enum VideoFrames {
    Animation(Frames<'static>),
    Sequence(std::vec::IntoIter<PathBuf>),
    Unavailable,
}

/// Stream of frames from an animated GIF or a directory of still images
///
/// Decoding stops at the first frame that cannot be read.
pub struct VideoSource {
    frames: VideoFrames,
}

impl VideoSource {
    /// Open an animation file or a directory of frames
    pub fn open(path: &Path) -> Self {
        let frames = if path.is_dir() {
            Self::open_sequence(path)
        } else {
            Self::open_animation(path)
        };

        let frames = frames.unwrap_or_else(|err| {
            warn!("{err}");
            VideoFrames::Unavailable
        });

        Self { frames }
    }

    fn open_animation(path: &Path) -> Result<VideoFrames> {
        let file = File::open(path).map_err(|e| DecomposeError::FileSystem {
            path: path.to_path_buf(),
            operation: "open animation",
            source: e,
        })?;

        let decoder =
            GifDecoder::new(BufReader::new(file)).map_err(|e| DecomposeError::ImageLoad {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(VideoFrames::Animation(decoder.into_frames()))
    }

    fn open_sequence(path: &Path) -> Result<VideoFrames> {
        let entries = std::fs::read_dir(path).map_err(|e| DecomposeError::FileSystem {
            path: path.to_path_buf(),
            operation: "read directory",
            source: e,
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let file = entry?.path();
            let is_frame = file
                .extension()
                .and_then(|s| s.to_str())
                .is_some_and(|ext| {
                    SEQUENCE_EXTENSIONS
                        .iter()
                        .any(|known| known.eq_ignore_ascii_case(ext))
                });
            if is_frame && file.is_file() {
                files.push(file);
            }
        }

        if files.is_empty() {
            return Err(DecomposeError::InvalidSourceData {
                reason: format!("no frames found in '{}'", path.display()),
            });
        }

        files.sort();
        Ok(VideoFrames::Sequence(files.into_iter()))
    }

    fn decode_next(&mut self) -> Option<Result<Frame>> {
        match &mut self.frames {
            VideoFrames::Animation(frames) => frames.next().map(|decoded| {
                let buffer = decoded?.into_buffer();
                frame_from_image(&DynamicImage::ImageRgba8(buffer).into_rgb8())
            }),
            VideoFrames::Sequence(paths) => paths
                .next()
                .map(|path| load_image(&path).and_then(|image| frame_from_image(&image))),
            VideoFrames::Unavailable => None,
        }
    }
}

impl FrameSource for VideoSource {
    fn is_ready(&self) -> bool {
        !matches!(self.frames, VideoFrames::Unavailable)
    }

    fn next_frame(&mut self) -> Option<Frame> {
        match self.decode_next()? {
            Ok(frame) => Some(frame),
            Err(err) => {
                error!("stopping frame acquisition: {err}");
                self.frames = VideoFrames::Unavailable;
                None
            }
        }
    }
}

/// Frames supplied by any iterator, typically already decoded in memory
pub struct IterSource<I> {
    frames: I,
}

impl<I: Iterator<Item = Frame>> IterSource<I> {
    /// Wrap an iterator of frames
    pub const fn new(frames: I) -> Self {
        Self { frames }
    }
}

impl<I: Iterator<Item = Frame>> FrameSource for IterSource<I> {
    fn is_ready(&self) -> bool {
        true
    }

    fn next_frame(&mut self) -> Option<Frame> {
        self.frames.next()
    }
}
