//! Curated preview props, keyed by component id.
//!
//! Components not listed here preview with their own defaults. Both post-card
//! entries share one bag; each card reads only the keys it knows.

use serde_json::{Value, json};

use crate::render::PropBag;

/// Component ids with curated preview props.
pub const CURATED: &[&str] = &[
    "hero",
    "section",
    "container",
    "grid",
    "sidebar-layout",
    "breadcrumb",
    "tabs",
    "pills",
    "pagination",
    "filter-bar",
    "card",
    "stat-card",
    "volunteer-card",
    "post-card",
    "input",
    "textarea",
    "select",
    "checkbox",
    "radio",
    "toggle-switch",
    "form-group",
    "range-slider",
    "search-input",
    "button",
    "icon-button",
    "button-group",
    "fab",
    "alert",
    "empty-state",
    "modal",
    "skeleton",
    "loading-spinner",
    "avatar",
    "avatar-stack",
    "badge",
    "icon",
    "image",
    "code-block",
    "progress-bar",
    "stat",
    "leaderboard",
    "table",
    "list",
    "timeline-item",
    "accordion",
    "tooltip",
    "copy-button",
    "star-rating",
    "notification-item",
    "nexus-score-charts",
];

/// Preview props for a component; an empty bag when none are curated.
pub fn sample_props(component_id: &str) -> PropBag {
    sample_value(component_id).map_or_else(PropBag::new, PropBag::from)
}

fn sample_value(component_id: &str) -> Option<Value> {
    let value = match component_id {
        "hero" => json!({
            "title": "Make a difference today",
            "subtitle": "Find volunteering opportunities in your community.",
            "icon": "hand-holding-heart",
            "badge": {"icon": "sparkles", "text": "New opportunities weekly"},
            "buttons": [
                {"label": "Browse", "icon": "magnifying-glass", "href": "#"},
                {"label": "Learn more", "variant": "outline", "href": "#"}
            ]
        }),
        "section" => json!({
            "title": "Recent activity",
            "icon": "clock",
            "content": "<p>Section body content.</p>",
            "actions": [{"label": "View all", "href": "#"}]
        }),
        "container" => json!({
            "size": "md",
            "slot": "<p>Content constrained to a readable width.</p>"
        }),
        "grid" => json!({
            "cols": 3,
            "items": ["<div>One</div>", "<div>Two</div>", "<div>Three</div>"]
        }),
        "sidebar-layout" => json!({
            "sidebarContent": "<nav>Filters</nav>",
            "mainContent": "<p>Results</p>"
        }),
        "breadcrumb" => json!({
            "items": [
                {"label": "Home", "href": "#"},
                {"label": "Category", "href": "#"},
                {"label": "Current Page"}
            ]
        }),
        "tabs" => json!({
            "tabs": [
                {"id": "tab1", "label": "Tab 1", "icon": "home"},
                {"id": "tab2", "label": "Tab 2", "count": 5},
                {"id": "tab3", "label": "Tab 3"}
            ],
            "activeTab": "tab1"
        }),
        "pills" => json!({
            "items": [
                {"id": "all", "label": "All"},
                {"id": "remote", "label": "Remote", "count": 4},
                {"id": "local", "label": "Local"}
            ],
            "active": "all"
        }),
        "pagination" => json!({"currentPage": 4, "totalPages": 12, "baseUrl": "#page-"}),
        "filter-bar" => json!({
            "filters": [
                {"id": "all", "label": "All"},
                {"id": "week", "label": "This week"}
            ],
            "active": "all",
            "showSearch": true
        }),
        "card" => json!({
            "header": "<strong>Card header</strong>",
            "body": "<p>Glass card body.</p>",
            "footer": "<small>Footer</small>"
        }),
        "stat-card" => json!({
            "label": "Hours logged",
            "value": "1,284",
            "icon": "clock",
            "trend": "up",
            "trendValue": "+12%"
        }),
        "volunteer-card" => json!({
            "opportunity": {
                "id": 1,
                "title": "Community garden helper",
                "organization": "Green Streets",
                "location": "Riverside Park",
                "description": "Help plant, water and maintain the shared vegetable beds.",
                "hours_needed": 4,
                "url": "#"
            }
        }),
        "post-card" => json!({
            "post": {
                "id": 42,
                "content": "Planted 40 trees with the Saturday crew!",
                "author_name": "Jane Smith",
                "likes": 12,
                "comments": 3,
                "likes_count": 12,
                "comments_count": 3,
                "created_at": "2 hours ago"
            },
            "postAuthor": {"id": 7, "name": "Jane Smith"},
            "currentUserId": 7
        }),
        "input" => json!({
            "name": "email",
            "type": "email",
            "placeholder": "you@example.com",
            "icon": "envelope"
        }),
        "textarea" => json!({"name": "bio", "placeholder": "Tell us about yourself", "rows": 4}),
        "select" => json!({
            "name": "category",
            "placeholder": "Choose a category",
            "options": {"env": "Environment", "edu": "Education", "health": "Health"}
        }),
        "checkbox" => json!({
            "name": "terms",
            "label": "I agree to the terms",
            "description": "You can withdraw at any time."
        }),
        "radio" => json!({
            "name": "frequency",
            "options": [
                {"value": "once", "label": "One-off"},
                {"value": "weekly", "label": "Weekly"}
            ],
            "selected": "weekly"
        }),
        "toggle-switch" => json!({"name": "notifications", "label": "Email notifications", "checked": true}),
        "form-group" => json!({
            "label": "Display name",
            "name": "display_name",
            "help": "Shown on your public profile.",
            "required": true,
            "content": "<input type=\"text\" id=\"display_name\" name=\"display_name\">"
        }),
        "range-slider" => json!({"name": "distance", "label": "Distance (km)", "value": 25, "max": 50}),
        "search-input" => json!({"placeholder": "Search opportunities..."}),
        "button" => json!({"label": "Click Me", "variant": "primary", "icon": "arrow-right"}),
        "icon-button" => json!({"icon": "heart", "label": "Like"}),
        "button-group" => json!({
            "buttons": [
                {"label": "Day", "variant": "outline"},
                {"label": "Week", "variant": "outline"},
                {"label": "Month", "variant": "outline"}
            ]
        }),
        "fab" => json!({"icon": "plus", "label": "Create"}),
        "alert" => json!({
            "type": "info",
            "message": "This is an informational alert message.",
            "dismissible": true
        }),
        "empty-state" => json!({
            "icon": "",
            "title": "No results found",
            "message": "Try adjusting your search criteria.",
            "action": {"label": "Clear Search", "href": "#"}
        }),
        "modal" => json!({
            "id": "preview-modal",
            "title": "Confirm",
            "content": "<p>Modal body.</p>"
        }),
        "skeleton" => json!({"type": "card", "count": 2}),
        "loading-spinner" => json!({"message": "Loading..."}),
        "avatar" => json!({"name": "Jane Smith", "image": "", "size": 48, "status": "online"}),
        "avatar-stack" => json!({
            "users": [
                {"name": "Jane Smith"},
                {"name": "Omar Aziz"},
                {"name": "Li Wei"},
                {"name": "Ana Costa"},
                {"name": "Sam Green"}
            ]
        }),
        "badge" => json!({"text": "New", "variant": "success", "icon": "sparkles", "pill": true}),
        "icon" => json!({"name": "star", "size": "lg", "color": "warning"}),
        "image" => json!({"src": "/assets/img/placeholder.svg", "alt": "Placeholder", "aspectRatio": "16/9"}),
        "code-block" => json!({
            "code": "let html = renderer.render_component(\"buttons/button\", &props)?;",
            "language": "rust",
            "title": "Rendering a component"
        }),
        "progress-bar" => json!({"percent": 65, "label": "Progress", "color": "primary"}),
        "stat" => json!({"value": "87", "label": "Volunteers", "icon": "users", "trend": "up", "trendValue": "+5"}),
        "leaderboard" => json!({
            "users": [
                {"id": 1, "name": "Jane Smith", "score": 1250},
                {"id": 2, "name": "Omar Aziz", "score": 980},
                {"id": 3, "name": "Li Wei", "score": 875}
            ],
            "highlightUserId": 2
        }),
        "table" => json!({
            "headers": [{"key": "name", "label": "Name"}, {"key": "hours", "label": "Hours"}],
            "rows": [
                {"name": "Jane Smith", "hours": 42},
                {"name": "Omar Aziz", "hours": 17}
            ]
        }),
        "list" => json!({
            "items": [
                {"label": "Profile", "icon": "user", "href": "#"},
                {"label": "Settings", "icon": "gear", "href": "#", "meta": "3"}
            ]
        }),
        "timeline-item" => json!({
            "icon": "check",
            "title": "Application approved",
            "content": "Community garden helper",
            "time": "Yesterday",
            "variant": "success"
        }),
        "accordion" => json!({
            "items": [
                {"title": "What is a timebank?", "content": "<p>Hours are the currency.</p>", "expanded": true},
                {"title": "How do I join?", "content": "<p>Sign up and complete your profile.</p>"}
            ]
        }),
        "tooltip" => json!({
            "content": "More information",
            "trigger": "<button type=\"button\">Hover me</button>"
        }),
        "copy-button" => json!({"text": "https://example.org/invite/abc123"}),
        "star-rating" => json!({"value": 3.5, "readonly": true}),
        "notification-item" => json!({
            "notification": {
                "id": 1,
                "type": "like",
                "message": "John liked your post",
                "time": "5 min ago"
            },
            "unread": true
        }),
        "nexus-score-charts" => json!({
            "scoreData": {
                "total_score": 720,
                "max_score": 1000,
                "tier": "Gold",
                "categories": [
                    {"label": "Engagement", "score": 80},
                    {"label": "Quality", "score": 60},
                    {"label": "Volunteering", "score": 90},
                    {"label": "Activity", "score": 40},
                    {"label": "Growth", "score": 55}
                ]
            }
        }),
        _ => return None,
    };
    Some(value)
}
