use serde::{Deserialize, Serialize};

/// One annotation tag with its display color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    /// Hue in degrees, `[0, 360)`.
    pub color_hue: f64,
}

impl Tag {
    pub fn new(name: impl Into<String>, color_hue: f64) -> Self {
        Self {
            name: name.into(),
            color_hue: color_hue.rem_euclid(360.0),
        }
    }

    /// Stroke color for regions carrying this tag.
    pub fn css_color(&self) -> String {
        format!("hsl({}, 100%, 50%)", self.color_hue)
    }

    /// Translucent fill color for regions carrying this tag.
    pub fn css_fill(&self) -> String {
        format!("hsla({}, 100%, 50%, 0.2)", self.color_hue)
    }
}

/// Ordered set of tags attached to a region. The first tag is primary.
///
/// Descriptors are replaced wholesale on update; there is no merge.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Tag>", into = "Vec<Tag>")]
pub struct TagsDescriptor {
    tags: Vec<Tag>,
}

impl TagsDescriptor {
    /// Creates a descriptor, keeping the first occurrence of each name.
    pub fn new(tags: Vec<Tag>) -> Self {
        let mut unique: Vec<Tag> = Vec::with_capacity(tags.len());
        for tag in tags {
            if !unique.iter().any(|t| t.name == tag.name) {
                unique.push(tag);
            }
        }
        Self { tags: unique }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn primary(&self) -> Option<&Tag> {
        self.tags.first()
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(|t| t.name.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tags.iter().any(|t| t.name == name)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Comma-separated tag names, used as the region tooltip.
    pub fn tooltip(&self) -> String {
        self.names().collect::<Vec<_>>().join(", ")
    }
}

impl From<Vec<Tag>> for TagsDescriptor {
    fn from(tags: Vec<Tag>) -> Self {
        Self::new(tags)
    }
}

impl From<TagsDescriptor> for Vec<Tag> {
    fn from(descriptor: TagsDescriptor) -> Self {
        descriptor.tags
    }
}
