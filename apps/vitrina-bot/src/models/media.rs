use tracing::warn;
use url::Url;
use vitrina_db::Product;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Video,
    Photo,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Media {
    pub kind: MediaKind,
    pub url: Url,
}

/// The single media item shown for a product: a valid video URL wins over a
/// valid image URL. Unparseable URLs are skipped.
pub fn select_media(product: &Product) -> Option<Media> {
    let candidates = [
        (MediaKind::Video, product.video_url()),
        (MediaKind::Photo, product.image_url()),
    ];

    candidates.into_iter().find_map(|(kind, raw)| {
        let raw = raw?;
        match Url::parse(raw) {
            Ok(url) => Some(Media { kind, url }),
            Err(e) => {
                warn!(product_id = product.id, "Ignoring invalid {:?} URL {:?}: {}", kind, raw, e);
                None
            }
        }
    })
}
