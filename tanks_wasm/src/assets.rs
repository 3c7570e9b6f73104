use std::collections::HashMap;

use tanks_core::assets::SpriteKey;
use web_sys::HtmlImageElement;

/// Every sprite image, requested as soon as the page starts
pub struct Sprites {
    images: HashMap<SpriteKey, HtmlImageElement>,
}

impl Sprites {
    pub fn load() -> Self {
        let images = SpriteKey::ALL
            .into_iter()
            .map(|key| {
                let image = HtmlImageElement::new().expect("document should create images");
                image.set_src(&key.path());
                (key, image)
            })
            .collect();

        Self { images }
    }

    pub fn get(&self, key: SpriteKey) -> Option<&HtmlImageElement> {
        self.images.get(&key)
    }

    /// Whether the browser is done with every image, successfully or not
    pub fn settled(&self) -> bool {
        self.images.values().all(HtmlImageElement::complete)
    }

    /// Broken images also report `complete`, but with no pixels
    pub fn is_loaded(&self, path: &str) -> bool {
        self.images
            .iter()
            .any(|(key, image)| key.path() == path && image.complete() && image.natural_width() > 0)
    }
}
