//! Testing utilities for the fixup workspace
//!
//! Shared fixtures: battle table source snippets and generated JPEGs.

#![allow(missing_docs)]

use image::codecs::jpeg::JpegEncoder;
use image::{Rgb, RgbImage};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Cut-down `PokerBattleTable.tsx` with every anchor the table recipes use
/// and two resolution timers.
pub const TABLE_SOURCE: &str = r#"export default function PokerBattleTable() {
  useEffect(() => {
    if (!gs) return;

      // Sync opponent's selected card (only show after they select)
      if (isHost && gs.guestSelectedCard) {
        setOpponentSelectedCard(gs.guestSelectedCard);
      } else if (!isHost && gs.hostSelectedCard) {
        setOpponentSelectedCard(gs.hostSelectedCard);
      }

      // Sync opponent's action
      if (isHost && gs.guestAction) {
        setOpponentAction(gs.guestAction as CardAction);
      } else if (!isHost && gs.hostAction) {
        setOpponentAction(gs.hostAction as CardAction);
      }
  }, [gs]);

  useEffect(() => {
    const t = setTimeout(() => {
      setPhase('resolution');
    }, 3000);
    const u = setTimeout(() => {
      setPhase('next');
    }, 3000);
    return () => { clearTimeout(t); clearTimeout(u); };
  }, [phase]);

  return (
    <div>
                <div className="opponent-hand">
                  <div className="grid grid-cols-5 gap-2">
                    {opponentHand.map((c) => <Card key={c.id} card={c} />)}
                  </div>
                </div>

                {/* CENTER - CARD BATTLE AREA */}
                <div className="battle" />

                <div className="player-hand">
                  <div className="grid grid-cols-5 gap-2">
                    {playerHand.map((c) => <Card key={c.id} card={c} />)}
                  </div>
                </div>

                {/* BOOST ACTIONS */}
                <div className="boosts" />
    </div>
  );
}
"#;

/// Source with timers but none of the block anchors
pub const SOURCE_WITHOUT_ANCHORS: &str = r#"export function Lobby() {
  useEffect(() => {
    const t = setTimeout(() => {
      setReady(true);
    }, 3000);
  }, []);
  return <div className="lobby" />;
}
"#;

/// Convert LF line endings to CRLF
#[must_use]
pub fn to_crlf(text: &str) -> String {
    text.replace('\n', "\r\n")
}

/// Scratch directory holding a copy of `contents` at `components/PokerBattleTable.tsx`
pub fn table_workspace(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("components").join("PokerBattleTable.tsx");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, contents).unwrap();
    (dir, path)
}

/// Gradient test image
#[must_use]
pub fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let r = u8::try_from(x * 255 / width.max(1)).unwrap_or(u8::MAX);
        let g = u8::try_from(y * 255 / height.max(1)).unwrap_or(u8::MAX);
        Rgb([r, g, 128])
    })
}

/// Write a `width × height` gradient JPEG to `path`
pub fn write_jpeg(path: impl AsRef<Path>, width: u32, height: u32) {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    let file = File::create(path).unwrap();
    let mut encoder = JpegEncoder::new_with_quality(BufWriter::new(file), 85);
    encoder.encode_image(&gradient(width, height)).unwrap();
}

/// Dimensions of the image stored at `path`
#[must_use]
pub fn image_dimensions(path: impl AsRef<Path>) -> (u32, u32) {
    image::image_dimensions(path).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_source_has_two_timers() {
        assert_eq!(TABLE_SOURCE.matches("}, 3000);").count(), 2);
    }

    #[test]
    fn written_jpeg_has_requested_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("public").join("shot.jpg");
        write_jpeg(&path, 37, 21);
        assert_eq!(image_dimensions(&path), (37, 21));
    }

    #[test]
    fn crlf_conversion() {
        assert_eq!(to_crlf("a\nb\n"), "a\r\nb\r\n");
    }
}
