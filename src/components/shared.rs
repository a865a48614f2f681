//! Components shared across feed, profile and group pages.
//!
//! The feed post card here takes the full post record plus its author and
//! wires like/comment/share controls for the page script. The compact card in
//! [`cards`](super::cards) is a different contract and stays separate.

use serde::Deserialize;

use super::media::{AvatarProps, avatar};
use crate::markup::{Markup, el, icon};
use crate::render::{PropBag, TemplateSet};

/// A feed post.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FeedPost {
    pub id: i64,
    pub content: String,
    pub image_url: String,
    /// Already formatted for display.
    pub created_at: String,
    pub likes_count: i64,
    pub comments_count: i64,
    /// Whether the viewer has liked the post.
    pub liked: bool,
    pub visibility: String,
}

/// The post's author.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PostAuthor {
    pub id: i64,
    pub name: String,
    pub avatar_url: String,
    pub profile_url: String,
}

/// Props for `shared/post-card`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeedPostCardProps {
    pub post: FeedPost,
    pub post_author: PostAuthor,
    /// The viewer; `None` when anonymous.
    pub current_user_id: Option<i64>,
    pub show_actions: bool,
}

impl Default for FeedPostCardProps {
    fn default() -> Self {
        Self {
            post: FeedPost::default(),
            post_author: PostAuthor::default(),
            current_user_id: None,
            show_actions: true,
        }
    }
}

fn action(kind: &'static str, icon_name: &str, label: String, post_id: i64) -> Markup {
    el("button")
        .attr("type", "button")
        .class("nexus-feed-post__action")
        .class(format!("nexus-feed-post__action--{kind}"))
        .attr("data-action", kind)
        .attr("data-post-id", post_id)
        .child(icon(icon_name))
        .child(el("span").text(label))
        .into()
}

pub fn feed_post_card(props: &FeedPostCardProps) -> Markup {
    let post = &props.post;
    let author = &props.post_author;
    let author_name = if author.name.is_empty() {
        "Community member"
    } else {
        author.name.as_str()
    };
    let is_owner = props.current_user_id.is_some_and(|id| id == author.id && id > 0);

    let name = if author.profile_url.is_empty() {
        el("strong").class("nexus-feed-post__author-name").text(author_name)
    } else {
        el("a")
            .class("nexus-feed-post__author-name")
            .attr("href", author.profile_url.as_str())
            .text(author_name)
    };

    let header = el("header")
        .class("nexus-feed-post__header")
        .child(avatar(&AvatarProps {
            image: author.avatar_url.clone(),
            name: author_name.to_string(),
            size: 40,
            ..AvatarProps::default()
        }))
        .child(
            el("div")
                .class("nexus-feed-post__meta")
                .child(name)
                .child((!post.created_at.is_empty()).then(|| {
                    Markup::from(el("time").class("nexus-feed-post__time").text(post.created_at.as_str()))
                })),
        )
        .child(is_owner.then(|| {
            Markup::from(
                el("button")
                    .attr("type", "button")
                    .class("nexus-feed-post__menu")
                    .attr("data-action", "delete")
                    .attr("data-post-id", post.id)
                    .attr("aria-label", "Delete post")
                    .child(icon("trash")),
            )
        }));

    let image = (!post.image_url.is_empty()).then(|| {
        Markup::from(
            el("img")
                .class("nexus-feed-post__image")
                .attr("src", post.image_url.as_str())
                .attr("alt", "")
                .attr("loading", "lazy"),
        )
    });

    let actions = (props.show_actions && props.current_user_id.is_some()).then(|| {
        Markup::from(
            el("footer")
                .class("nexus-feed-post__actions")
                .child(action(
                    "like",
                    if post.liked { "heart-circle-check" } else { "heart" },
                    format!("{} Like", post.likes_count),
                    post.id,
                ))
                .child(action(
                    "comment",
                    "comment",
                    format!("{} Comment", post.comments_count),
                    post.id,
                ))
                .child(action("share", "share", "Share".to_string(), post.id)),
        )
    });

    el("article")
        .class("nexus-feed-post")
        .class_if(post.liked, "nexus-feed-post--liked")
        .attr("id", format!("post-{}", post.id))
        .child(header)
        .child(el("div").class("nexus-feed-post__content").text(post.content.as_str()))
        .child(image)
        .child(actions)
        .into()
}

pub(super) fn register(set: &mut TemplateSet) {
    set.register("shared/post-card", |bag: &PropBag| feed_post_card(&bag.decode()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> FeedPostCardProps {
        PropBag::from(json!({
            "post": {"id": 9, "content": "Planted 40 trees!", "likes_count": 3, "comments_count": 1},
            "postAuthor": {"id": 5, "name": "Jane Smith"},
            "currentUserId": 5
        }))
        .decode()
    }

    #[test]
    fn owner_sees_delete_control() {
        let html = feed_post_card(&sample()).to_string();
        assert!(html.contains("data-action=\"delete\""));
        assert!(html.contains("3 Like"));
        assert!(html.contains("id=\"post-9\""));
    }

    #[test]
    fn anonymous_viewer_gets_no_actions() {
        let props = FeedPostCardProps {
            current_user_id: None,
            ..sample()
        };
        let html = feed_post_card(&props).to_string();
        assert!(!html.contains("nexus-feed-post__actions"));
        assert!(!html.contains("data-action=\"delete\""));
        assert!(html.contains("Planted 40 trees!"));
    }

    #[test]
    fn missing_author_gets_placeholder_name() {
        let html = feed_post_card(&FeedPostCardProps::default()).to_string();
        assert!(html.contains("Community member"));
        assert!(html.contains(">CM</span>"));
    }
}
