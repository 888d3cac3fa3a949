use super::sheet::{Declaration, StyleRule, StyleSheet, ROOT_SELECTOR};

/// Scope class carried by the outer container of every article card
pub const CARD_SCOPE: &str = "article-card";

pub const CARD_MAX_WIDTH: f32 = 430.0;
pub const CARD_MAX_HEIGHT: f32 = 324.0;
pub const CARD_PADDING_BOTTOM: f32 = 14.0;
pub const PHOTO_HEIGHT: f32 = 240.0;
pub const PLACEHOLDER_BACKGROUND: &str = "#fff";

pub const PHOTO_CLASS: &str = "article-photo";
pub const TEXT_WRAP_CLASS: &str = "article-text-wrap";
pub const USER_WRAP_CLASS: &str = "article-user-wrap";
pub const USER_PHOTO_CLASS: &str = "article-user-photo";
pub const IMG_CLASS: &str = "article-img";

pub const PHOTO_SELECTOR: &str = ".article-photo";
pub const TEXT_WRAP_SELECTOR: &str = ".article-text-wrap";
pub const USER_WRAP_SELECTOR: &str = ".article-text-wrap .article-user-wrap";
pub const USER_PHOTO_SELECTOR: &str = ".article-text-wrap .article-user-wrap .article-user-photo";
pub const USER_ID_SELECTOR: &str = ".article-text-wrap .article-user-wrap .article-user-id";
pub const TITLE_SELECTOR: &str = ".article-text-wrap .article-movie-title";
pub const DESCRIPTION_SELECTOR: &str = ".article-text-wrap .article-movie-desc";
const PHOTO_IMG_SELECTOR: &str = ".article-photo .article-img";
const USER_PHOTO_IMG_SELECTOR: &str =
    ".article-text-wrap .article-user-wrap .article-user-photo .article-img";

/// Avatar shown next to the nickname
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Avatar {
    pub size: f32,
    pub radius: f32,
}

pub const AVATAR: Avatar = Avatar {
    size: 18.0,
    radius: 9.0,
};

impl Avatar {
    /// Fully rounded corners on a square box
    pub fn is_circle(&self) -> bool {
        self.radius * 2.0 == self.size
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRole {
    UserId,
    Title,
    Description,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypeScale {
    pub font_size: f32,
    pub line_height: f32,
    pub weight: Option<u16>,
    pub color: &'static str,
}

impl TextRole {
    pub const ALL: [TextRole; 3] = [TextRole::UserId, TextRole::Title, TextRole::Description];

    pub fn class_name(&self) -> &'static str {
        match self {
            TextRole::UserId => "article-user-id",
            TextRole::Title => "article-movie-title",
            TextRole::Description => "article-movie-desc",
        }
    }

    pub fn selector(&self) -> &'static str {
        match self {
            TextRole::UserId => USER_ID_SELECTOR,
            TextRole::Title => TITLE_SELECTOR,
            TextRole::Description => DESCRIPTION_SELECTOR,
        }
    }

    pub fn scale(&self) -> TypeScale {
        match self {
            TextRole::UserId => TypeScale {
                font_size: 13.0,
                line_height: 18.0,
                weight: None,
                color: "#747474",
            },
            TextRole::Title => TypeScale {
                font_size: 20.0,
                line_height: 20.0,
                weight: Some(500),
                color: "#141414",
            },
            TextRole::Description => TypeScale {
                font_size: 14.0,
                line_height: 20.0,
                weight: Some(400),
                color: "#5E5E64",
            },
        }
    }
}

impl TypeScale {
    fn declarations(&self) -> Vec<Declaration> {
        let mut decls = vec![Declaration::new("font-size", px(self.font_size))];
        if let Some(weight) = self.weight {
            decls.push(Declaration::new("font-weight", weight.to_string()));
        }
        decls.push(Declaration::new("line-height", px(self.line_height)));
        decls.push(Declaration::new("color", self.color));
        decls
    }
}

fn px(value: f32) -> String {
    format!("{}px", value)
}

/// Build the scoped style sheet for `ArticleCard`
pub fn card_style_sheet() -> StyleSheet {
    let mut title = TextRole::Title.scale().declarations();
    title.push(Declaration::new("margin-bottom", "4px"));

    StyleSheet::new(CARD_SCOPE)
        .with_rule(StyleRule::new(
            ROOT_SELECTOR,
            vec![
                Declaration::new("max-width", px(CARD_MAX_WIDTH)),
                Declaration::new("max-height", px(CARD_MAX_HEIGHT)),
                Declaration::new("width", "100%"),
                Declaration::new("padding-bottom", px(CARD_PADDING_BOTTOM)),
            ],
        ))
        .with_rule(StyleRule::new(
            PHOTO_SELECTOR,
            vec![
                Declaration::new("width", "100%"),
                Declaration::new("height", px(PHOTO_HEIGHT)),
                Declaration::new("background-color", PLACEHOLDER_BACKGROUND),
            ],
        ))
        .with_rule(StyleRule::new(
            TEXT_WRAP_SELECTOR,
            vec![Declaration::new("padding", "12px 0 0")],
        ))
        .with_rule(StyleRule::new(
            USER_WRAP_SELECTOR,
            vec![
                Declaration::new("display", "flex"),
                Declaration::new("gap", "4px"),
                Declaration::new("margin-bottom", "12px"),
            ],
        ))
        .with_rule(StyleRule::new(
            USER_PHOTO_SELECTOR,
            vec![
                Declaration::new("width", px(AVATAR.size)),
                Declaration::new("height", px(AVATAR.size)),
                Declaration::new("border-radius", px(AVATAR.radius)),
                Declaration::new("background-color", PLACEHOLDER_BACKGROUND),
            ],
        ))
        .with_rule(StyleRule::new(USER_ID_SELECTOR, TextRole::UserId.scale().declarations()))
        .with_rule(StyleRule::new(TITLE_SELECTOR, title))
        .with_rule(StyleRule::new(
            DESCRIPTION_SELECTOR,
            TextRole::Description.scale().declarations(),
        ))
        // Images fill their placeholder box when a URL is provided
        .with_rule(StyleRule::new(
            PHOTO_IMG_SELECTOR,
            vec![
                Declaration::new("width", "100%"),
                Declaration::new("height", "100%"),
                Declaration::new("object-fit", "cover"),
            ],
        ))
        .with_rule(StyleRule::new(
            USER_PHOTO_IMG_SELECTOR,
            vec![
                Declaration::new("width", "100%"),
                Declaration::new("height", "100%"),
                Declaration::new("object-fit", "cover"),
                Declaration::new("border-radius", "inherit"),
            ],
        ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_is_circle() {
        assert_eq!(AVATAR.size, 18.0);
        assert_eq!(AVATAR.radius, 9.0);
        assert!(AVATAR.is_circle());
        assert!(!Avatar { size: 18.0, radius: 4.0 }.is_circle());

        let sheet = card_style_sheet();
        let rule = sheet.rule(USER_PHOTO_SELECTOR).unwrap();
        assert_eq!(rule.get("width"), Some("18px"));
        assert_eq!(rule.get("height"), Some("18px"));
        assert_eq!(rule.get("border-radius"), Some("9px"));
    }

    #[test]
    fn test_container_caps() {
        let sheet = card_style_sheet();
        let root = sheet.rule(ROOT_SELECTOR).unwrap();
        assert_eq!(root.get("max-width"), Some("430px"));
        assert_eq!(root.get("max-height"), Some("324px"));
        assert_eq!(root.get("width"), Some("100%"));
        assert_eq!(root.get("padding-bottom"), Some("14px"));
    }

    #[test]
    fn test_type_scales() {
        let user = TextRole::UserId.scale();
        assert_eq!((user.font_size, user.line_height, user.weight, user.color), (13.0, 18.0, None, "#747474"));

        let title = TextRole::Title.scale();
        assert_eq!((title.font_size, title.line_height, title.weight, title.color), (20.0, 20.0, Some(500), "#141414"));

        let desc = TextRole::Description.scale();
        assert_eq!((desc.font_size, desc.line_height, desc.weight, desc.color), (14.0, 20.0, Some(400), "#5E5E64"));
    }

    #[test]
    fn test_rules_match_type_scales() {
        let sheet = card_style_sheet();
        for role in TextRole::ALL {
            let scale = role.scale();
            let rule = sheet.rule(role.selector()).unwrap();
            assert_eq!(rule.get("font-size"), Some(px(scale.font_size).as_str()));
            assert_eq!(rule.get("line-height"), Some(px(scale.line_height).as_str()));
            assert_eq!(rule.get("color"), Some(scale.color));
            assert_eq!(rule.get("font-weight").map(str::to_string), scale.weight.map(|w| w.to_string()));
            assert!(role.selector().ends_with(role.class_name()));
        }
        assert_eq!(sheet.rule(TITLE_SELECTOR).unwrap().get("margin-bottom"), Some("4px"));
    }

    // The description rule used to carry a stray quote and never matched.
    #[test]
    fn test_description_rule_applies() {
        let css = card_style_sheet().to_css().unwrap();
        assert!(css.contains(
            ".article-card .article-text-wrap .article-movie-desc {\n  font-size: 14px;\n  font-weight: 400;\n  line-height: 20px;\n  color: #5E5E64;\n}"
        ));
        assert!(!css.contains('\''));
    }

    #[test]
    fn test_every_rule_is_scoped() {
        let css = card_style_sheet().to_css().unwrap();
        for line in css.lines().filter(|l| l.ends_with('{')) {
            assert!(line.starts_with(".article-card"), "unscoped rule: {}", line);
        }
    }
}
