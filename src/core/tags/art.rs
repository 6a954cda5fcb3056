//! core/tags/art.rs
//! The crop-and-replace operation for one MP3 file.
//!
//! Order of operations matters here: the new picture bytes are staged into
//! a rebuilt tag, and the caller-visible tag plus the on-disk file change
//! only if the save succeeds. A failed decode/encode/save leaves the file
//! exactly as it was.

use std::io::Cursor;
use std::path::Path;

use id3::frame::{Content, Frame, Picture};
use id3::{ErrorKind, Tag, TagLike};
use image::ImageFormat;

use super::super::crop::CropBox;
use super::super::types::Outcome;

/// Crop the first embedded picture (APIC/PIC) of the MP3 at `path` to a
/// centered 1:1 square and write the file back in place.
///
/// Every file ends in exactly one terminal [`Outcome`]; nothing here
/// aborts a batch. Only the first picture frame is ever examined or
/// replaced, even when several are embedded.
pub fn crop_embedded_art(path: &Path) -> Outcome {
    let tag = match Tag::read_from_path(path) {
        Ok(t) => t,
        Err(err) if matches!(err.kind, ErrorKind::NoTag) => return Outcome::SkippedNoHeader,
        Err(err) => return Outcome::Failed(format!("read tag: {err}")),
    };

    if tag.frames().next().is_none() {
        return Outcome::SkippedNoTag;
    }

    let Some(first) = tag.pictures().next() else {
        return Outcome::SkippedNoPicture;
    };

    let img = match image::load_from_memory(&first.data) {
        Ok(i) => i,
        Err(err) => return Outcome::Failed(format!("decode embedded image: {err}")),
    };

    if CropBox::is_noop(img.width(), img.height()) {
        return Outcome::SkippedAlreadySquare;
    }

    let rect = CropBox::centered(img.width(), img.height());
    let cropped = img.crop_imm(rect.left, rect.top, rect.edge, rect.edge);

    // jpeg has no alpha channel; flatten to rgb8 before encoding
    let mut buf = Cursor::new(Vec::new());
    if let Err(err) = cropped.to_rgb8().write_to(&mut buf, ImageFormat::Jpeg) {
        return Outcome::Failed(format!("encode jpeg: {err}"));
    }

    let replacement = Picture {
        mime_type: "image/jpeg".to_string(),
        picture_type: first.picture_type,
        description: first.description.clone(),
        data: buf.into_inner(),
    };

    let staged = replace_first_picture(&tag, replacement);

    match staged.write_to_path(path, tag.version()) {
        Ok(()) => Outcome::Processed,
        Err(err) => Outcome::Failed(format!("save tag: {err}")),
    }
}

/// Rebuild `tag` frame by frame, swapping only the first picture frame for
/// `replacement`. Text frames, comments, and any further pictures are
/// carried over untouched, in their original order.
fn replace_first_picture(tag: &Tag, replacement: Picture) -> Tag {
    let mut staged = Tag::with_version(tag.version());
    let mut replaced = false;

    for frame in tag.frames() {
        if !replaced && matches!(frame.content(), Content::Picture(_)) {
            let _ = staged.add_frame(Frame::with_content(
                frame.id(),
                Content::Picture(replacement.clone()),
            ));
            replaced = true;
        } else {
            let _ = staged.add_frame(frame.clone());
        }
    }

    staged
}

#[cfg(test)]
mod tests {
    use super::*;
    use id3::Version;
    use id3::frame::PictureType;

    fn picture(desc: &str, data: Vec<u8>) -> Picture {
        Picture {
            mime_type: "image/png".to_string(),
            picture_type: PictureType::CoverFront,
            description: desc.to_string(),
            data,
        }
    }

    #[test]
    fn only_the_first_picture_is_swapped() {
        let mut tag = Tag::with_version(Version::Id3v24);
        tag.set_title("A Song");
        let _ = tag.add_frame(picture("front", vec![1, 2, 3]));
        let _ = tag.add_frame(Picture {
            picture_type: PictureType::CoverBack,
            ..picture("back", vec![4, 5, 6])
        });

        let staged = replace_first_picture(&tag, picture("front", vec![9, 9]));

        let pics: Vec<&Picture> = staged.pictures().collect();
        assert_eq!(pics.len(), 2);
        assert_eq!(pics[0].data, vec![9, 9]);
        assert_eq!(pics[1].data, vec![4, 5, 6]);
        assert_eq!(staged.title(), Some("A Song"));
    }

    #[test]
    fn version_is_preserved_in_the_staged_tag() {
        let mut tag = Tag::with_version(Version::Id3v23);
        let _ = tag.add_frame(picture("", vec![1]));

        let staged = replace_first_picture(&tag, picture("", vec![2]));
        assert_eq!(staged.version(), Version::Id3v23);
    }
}
