//! The built-in component catalog.

use super::{CategoryDescriptor, ComponentDescriptor, PropDescriptor};

const fn prop(
    name: &'static str,
    ty: &'static str,
    default: &'static str,
    description: &'static str,
) -> PropDescriptor {
    PropDescriptor {
        name,
        ty,
        default,
        description,
    }
}

pub(super) static CATEGORIES: &[CategoryDescriptor] = &[
    CategoryDescriptor {
        id: "layout",
        label: "Layout",
        icon: "layer-group",
        components: LAYOUT,
    },
    CategoryDescriptor {
        id: "navigation",
        label: "Navigation",
        icon: "compass",
        components: NAVIGATION,
    },
    CategoryDescriptor {
        id: "cards",
        label: "Cards",
        icon: "square",
        components: CARDS,
    },
    CategoryDescriptor {
        id: "forms",
        label: "Forms",
        icon: "pen-to-square",
        components: FORMS,
    },
    CategoryDescriptor {
        id: "buttons",
        label: "Buttons",
        icon: "hand-pointer",
        components: BUTTONS,
    },
    CategoryDescriptor {
        id: "feedback",
        label: "Feedback",
        icon: "message",
        components: FEEDBACK,
    },
    CategoryDescriptor {
        id: "media",
        label: "Media",
        icon: "image",
        components: MEDIA,
    },
    CategoryDescriptor {
        id: "data",
        label: "Data Display",
        icon: "chart-bar",
        components: DATA,
    },
    CategoryDescriptor {
        id: "interactive",
        label: "Interactive",
        icon: "hand-sparkles",
        components: INTERACTIVE,
    },
    CategoryDescriptor {
        id: "social",
        label: "Social",
        icon: "users",
        components: SOCIAL,
    },
    CategoryDescriptor {
        id: "shared",
        label: "Shared",
        icon: "share-nodes",
        components: SHARED,
    },
    CategoryDescriptor {
        id: "nexus",
        label: "Nexus Score",
        icon: "star",
        components: NEXUS,
    },
];

static LAYOUT: &[ComponentDescriptor] = &[
    ComponentDescriptor {
        id: "hero",
        name: "Hero",
        template_path: "layout/hero",
        description: "Full-width hero section with title, subtitle, and call-to-action buttons.",
        props: &[
            prop("title", "string", "''", "Main heading text"),
            prop("subtitle", "string", "''", "Supporting text below title"),
            prop("icon", "string", "''", "FontAwesome icon name"),
            prop("badge", "array", "[]", "Badge config: ['icon', 'text']"),
            prop("buttons", "array", "[]", "Array of button configs"),
            prop("variant", "string", "'default'", "'default', 'centered', 'compact'"),
            prop("class", "string", "''", "Additional CSS classes"),
        ],
        used_on: &[],
    },
    ComponentDescriptor {
        id: "section",
        name: "Section",
        template_path: "layout/section",
        description: "Content section with optional title, icon, and action buttons.",
        props: &[
            prop("title", "string", "''", "Section heading"),
            prop("subtitle", "string", "''", "Description text"),
            prop("icon", "string", "''", "FontAwesome icon name"),
            prop("actions", "array", "[]", "Action button configs"),
            prop("content", "string", "''", "Section content (HTML)"),
            prop("variant", "string", "'default'", "'default', 'card', 'flat'"),
        ],
        used_on: &[],
    },
    ComponentDescriptor {
        id: "container",
        name: "Container",
        template_path: "layout/container",
        description: "Responsive container with configurable max-width.",
        props: &[
            prop("size", "string", "'lg'", "'sm', 'md', 'lg', 'xl', 'full'"),
            prop("class", "string", "''", "Additional CSS classes"),
        ],
        used_on: &[],
    },
    ComponentDescriptor {
        id: "grid",
        name: "Grid",
        template_path: "layout/grid",
        description: "Responsive grid layout with configurable columns.",
        props: &[
            prop("cols", "int", "3", "Number of columns (1-6)"),
            prop("gap", "string", "'md'", "'sm', 'md', 'lg'"),
            prop("items", "array", "[]", "Grid item contents"),
        ],
        used_on: &[],
    },
    ComponentDescriptor {
        id: "sidebar-layout",
        name: "Sidebar Layout",
        template_path: "layout/sidebar-layout",
        description: "Two-column layout with sidebar and main content area.",
        props: &[
            prop("sidebarContent", "string", "''", "Sidebar HTML content"),
            prop("mainContent", "string", "''", "Main area HTML content"),
            prop("sidebarPosition", "string", "'left'", "'left' or 'right'"),
            prop("sidebarWidth", "string", "'300px'", "Sidebar width"),
        ],
        used_on: &[],
    },
];

static NAVIGATION: &[ComponentDescriptor] = &[
    ComponentDescriptor {
        id: "breadcrumb",
        name: "Breadcrumb",
        template_path: "navigation/breadcrumb",
        description: "Navigation breadcrumb trail showing page hierarchy.",
        props: &[
            prop("items", "array", "[]", "Array of ['label', 'href'] items"),
            prop("separator", "string", "'/'", "Separator character"),
            prop("class", "string", "''", "Additional CSS classes"),
        ],
        used_on: &[],
    },
    ComponentDescriptor {
        id: "tabs",
        name: "Tabs",
        template_path: "navigation/tabs",
        description: "Tab navigation with optional icons and counts.",
        props: &[
            prop("tabs", "array", "[]", "Array of ['id', 'label', 'icon', 'count']"),
            prop("activeTab", "string", "''", "Active tab ID"),
            prop("variant", "string", "'default'", "'default', 'pills', 'underline'"),
        ],
        used_on: &[],
    },
    ComponentDescriptor {
        id: "pills",
        name: "Pills",
        template_path: "navigation/pills",
        description: "Horizontal pill-style navigation for filtering.",
        props: &[
            prop("items", "array", "[]", "Array of ['id', 'label', 'icon']"),
            prop("active", "string", "''", "Active item ID"),
            prop("size", "string", "'md'", "'sm', 'md', 'lg'"),
        ],
        used_on: &[],
    },
    ComponentDescriptor {
        id: "pagination",
        name: "Pagination",
        template_path: "navigation/pagination",
        description: "Page navigation with numbered links.",
        props: &[
            prop("currentPage", "int", "1", "Current page number"),
            prop("totalPages", "int", "1", "Total number of pages"),
            prop("baseUrl", "string", "'?page='", "URL base for page links"),
            prop("maxVisible", "int", "5", "Max visible page numbers"),
        ],
        used_on: &[],
    },
    ComponentDescriptor {
        id: "filter-bar",
        name: "Filter Bar",
        template_path: "navigation/filter-bar",
        description: "Filter navigation with optional search input.",
        props: &[
            prop("filters", "array", "[]", "Array of ['id', 'label', 'icon', 'count']"),
            prop("active", "string", "''", "Active filter ID"),
            prop("showSearch", "bool", "false", "Show search input"),
        ],
        used_on: &[],
    },
    ComponentDescriptor {
        id: "dropdown",
        name: "Dropdown",
        template_path: "navigation/dropdown",
        description: "Dropdown menu with trigger button.",
        props: &[
            prop("trigger", "string", "''", "Trigger button HTML"),
            prop("items", "array", "[]", "Menu item configs"),
            prop("align", "string", "'left'", "'left' or 'right'"),
        ],
        used_on: &[],
    },
];

static CARDS: &[ComponentDescriptor] = &[
    ComponentDescriptor {
        id: "card",
        name: "Card (Base)",
        template_path: "cards/card",
        description: "Generic card component that serves as base for all card types.",
        props: &[
            prop("header", "string", "''", "Card header HTML"),
            prop("body", "string", "''", "Card body HTML"),
            prop("footer", "string", "''", "Card footer HTML"),
            prop("variant", "string", "'glass'", "'default', 'glass', 'elevated'"),
            prop("href", "string", "''", "Optional link URL"),
        ],
        used_on: &[],
    },
    ComponentDescriptor {
        id: "listing-card",
        name: "Listing Card",
        template_path: "cards/listing-card",
        description: "Card for displaying service listings with image, price, and user info.",
        props: &[
            prop("listing", "array", "[]", "Listing data object"),
            prop("compact", "bool", "false", "Use compact layout"),
            prop("showUser", "bool", "true", "Show user info"),
        ],
        used_on: &[],
    },
    ComponentDescriptor {
        id: "member-card",
        name: "Member Card",
        template_path: "cards/member-card",
        description: "User profile card with avatar, bio, and connection actions.",
        props: &[
            prop("user", "array", "[]", "User data object"),
            prop("showBio", "bool", "true", "Show user bio"),
            prop("showSkills", "bool", "true", "Show skills tags"),
        ],
        used_on: &[],
    },
    ComponentDescriptor {
        id: "event-card",
        name: "Event Card",
        template_path: "cards/event-card",
        description: "Card for displaying events with date, location, and attendees.",
        props: &[
            prop("event", "array", "[]", "Event data object"),
            prop("compact", "bool", "false", "Use compact layout"),
            prop("showAttendees", "bool", "true", "Show attendee avatars"),
        ],
        used_on: &[],
    },
    ComponentDescriptor {
        id: "stat-card",
        name: "Stat Card",
        template_path: "cards/stat-card",
        description: "Card displaying a single metric with optional trend indicator.",
        props: &[
            prop("label", "string", "''", "Stat label"),
            prop("value", "string", "'0'", "Stat value"),
            prop("icon", "string", "''", "FontAwesome icon"),
            prop("trend", "string", "null", "'up', 'down', or null"),
            prop("trendValue", "string", "''", "Trend percentage"),
        ],
        used_on: &[],
    },
    ComponentDescriptor {
        id: "achievement-card",
        name: "Achievement Card",
        template_path: "cards/achievement-card",
        description: "Card for displaying badges and achievements.",
        props: &[
            prop("badge", "array", "[]", "Badge data object"),
            prop("showProgress", "bool", "false", "Show progress bar"),
            prop("locked", "bool", "false", "Show as locked"),
        ],
        used_on: &[],
    },
    ComponentDescriptor {
        id: "group-card",
        name: "Group Card",
        template_path: "cards/group-card",
        description: "Card for displaying community groups.",
        props: &[
            prop("group", "array", "[]", "Group data object"),
            prop("showMembers", "bool", "true", "Show member count"),
        ],
        used_on: &[],
    },
    ComponentDescriptor {
        id: "resource-card",
        name: "Resource Card",
        template_path: "cards/resource-card",
        description: "Card for displaying downloadable resources.",
        props: &[
            prop("resource", "array", "[]", "Resource data object"),
            prop("showDownload", "bool", "true", "Show download button"),
        ],
        used_on: &[],
    },
    ComponentDescriptor {
        id: "volunteer-card",
        name: "Volunteer Card",
        template_path: "cards/volunteer-card",
        description: "Card for displaying volunteer opportunities.",
        props: &[
            prop("opportunity", "array", "[]", "Opportunity data object"),
            prop("showOrg", "bool", "true", "Show organization"),
        ],
        used_on: &[],
    },
    ComponentDescriptor {
        id: "post-card",
        name: "Post Card",
        template_path: "cards/post-card",
        description: "Social feed post card with reactions and comments.",
        props: &[
            prop("post", "array", "[]", "Post data object"),
            prop("showActions", "bool", "true", "Show action buttons"),
        ],
        used_on: &[],
    },
];

static FORMS: &[ComponentDescriptor] = &[
    ComponentDescriptor {
        id: "input",
        name: "Input",
        template_path: "forms/input",
        description: "Text input field with optional icon and validation states.",
        props: &[
            prop("name", "string", "''", "Input name attribute"),
            prop("type", "string", "'text'", "'text', 'email', 'password', etc."),
            prop("value", "string", "''", "Input value"),
            prop("placeholder", "string", "''", "Placeholder text"),
            prop("icon", "string", "''", "FontAwesome icon"),
            prop("disabled", "bool", "false", "Disable input"),
            prop("required", "bool", "false", "Mark as required"),
        ],
        used_on: &[],
    },
    ComponentDescriptor {
        id: "textarea",
        name: "Textarea",
        template_path: "forms/textarea",
        description: "Multi-line text input with auto-resize option.",
        props: &[
            prop("name", "string", "''", "Textarea name"),
            prop("value", "string", "''", "Textarea value"),
            prop("rows", "int", "3", "Number of rows"),
            prop("autoResize", "bool", "false", "Auto-resize height"),
        ],
        used_on: &[],
    },
    ComponentDescriptor {
        id: "select",
        name: "Select",
        template_path: "forms/select",
        description: "Dropdown select input with options.",
        props: &[
            prop("name", "string", "''", "Select name"),
            prop("options", "array", "[]", "Options as key => label"),
            prop("selected", "string", "''", "Selected value"),
            prop("placeholder", "string", "''", "Placeholder option"),
        ],
        used_on: &[],
    },
    ComponentDescriptor {
        id: "checkbox",
        name: "Checkbox",
        template_path: "forms/checkbox",
        description: "Checkbox input with label and description.",
        props: &[
            prop("name", "string", "''", "Checkbox name"),
            prop("label", "string", "''", "Label text"),
            prop("description", "string", "''", "Help text"),
            prop("checked", "bool", "false", "Checked state"),
        ],
        used_on: &[],
    },
    ComponentDescriptor {
        id: "radio",
        name: "Radio",
        template_path: "forms/radio",
        description: "Radio button group for single selection.",
        props: &[
            prop("name", "string", "''", "Radio group name"),
            prop("options", "array", "[]", "Options array"),
            prop("selected", "string", "''", "Selected value"),
        ],
        used_on: &[],
    },
    ComponentDescriptor {
        id: "toggle-switch",
        name: "Toggle Switch",
        template_path: "forms/toggle-switch",
        description: "On/off toggle switch control.",
        props: &[
            prop("name", "string", "''", "Toggle name"),
            prop("label", "string", "''", "Label text"),
            prop("checked", "bool", "false", "Checked state"),
            prop("size", "string", "'md'", "'sm', 'md', 'lg'"),
        ],
        used_on: &["settings", "profile", "admin configs", "feature toggles"],
    },
    ComponentDescriptor {
        id: "form-group",
        name: "Form Group",
        template_path: "forms/form-group",
        description: "Wrapper for form fields with label, error, and help text.",
        props: &[
            prop("label", "string", "''", "Field label"),
            prop("name", "string", "''", "Field name (for ID)"),
            prop("error", "string", "''", "Error message"),
            prop("help", "string", "''", "Help text"),
            prop("required", "bool", "false", "Show required indicator"),
            prop("content", "string", "''", "Field content (HTML)"),
        ],
        used_on: &[],
    },
    ComponentDescriptor {
        id: "file-upload",
        name: "File Upload",
        template_path: "forms/file-upload",
        description: "Drag-and-drop file upload with preview.",
        props: &[
            prop("name", "string", "''", "Input name"),
            prop("accept", "string", "'*'", "Accepted file types"),
            prop("multiple", "bool", "false", "Allow multiple files"),
            prop("maxSize", "int", "5242880", "Max file size (bytes)"),
        ],
        used_on: &["settings", "onboarding", "compose", "groups", "listings", "resources"],
    },
    ComponentDescriptor {
        id: "date-picker",
        name: "Date Picker",
        template_path: "forms/date-picker",
        description: "Date input with calendar picker.",
        props: &[
            prop("name", "string", "''", "Input name (required)"),
            prop("label", "string", "''", "Label text"),
            prop("value", "string", "''", "Date value (Y-m-d format)"),
            prop("min", "string", "''", "Minimum date"),
            prop("max", "string", "''", "Maximum date"),
            prop("required", "bool", "false", "Required field"),
            prop("format", "string", "'default'", "'default' or 'friendly'"),
        ],
        used_on: &["compose", "events", "polls", "goals", "volunteering", "newsletters"],
    },
    ComponentDescriptor {
        id: "time-picker",
        name: "Time Picker",
        template_path: "forms/time-picker",
        description: "Time input with clock picker.",
        props: &[
            prop("name", "string", "''", "Input name (required)"),
            prop("label", "string", "''", "Label text"),
            prop("value", "string", "''", "Time value (HH:MM format)"),
            prop("min", "string", "''", "Minimum time"),
            prop("max", "string", "''", "Maximum time"),
            prop("step", "int", "60", "Step in seconds"),
            prop("show12Hour", "bool", "true", "Show 12-hour format"),
        ],
        used_on: &["settings", "compose", "events", "polls", "volunteering", "newsletter scheduling"],
    },
    ComponentDescriptor {
        id: "range-slider",
        name: "Range Slider",
        template_path: "forms/range-slider",
        description: "Range/slider input for numeric values.",
        props: &[
            prop("name", "string", "''", "Input name (required)"),
            prop("label", "string", "''", "Label text"),
            prop("value", "int", "50", "Current value"),
            prop("min", "int", "0", "Minimum value"),
            prop("max", "int", "100", "Maximum value"),
            prop("step", "int", "1", "Step increment"),
            prop("showValue", "bool", "true", "Show current value"),
            prop("color", "string", "'primary'", "'primary', 'success', 'warning', 'danger'"),
        ],
        used_on: &["members list", "listings", "matches preferences", "admin configuration"],
    },
    ComponentDescriptor {
        id: "rich-text-editor",
        name: "Rich Text Editor",
        template_path: "forms/rich-text-editor",
        description: "WYSIWYG text editor wrapper.",
        props: &[
            prop("name", "string", "''", "Input name (required)"),
            prop("label", "string", "''", "Label text"),
            prop("value", "string", "''", "Content (HTML)"),
            prop("placeholder", "string", "'Start typing...'", "Placeholder text"),
            prop("minHeight", "int", "200", "Min height (px)"),
            prop("maxHeight", "int", "500", "Max height (px)"),
            prop("variant", "string", "'full'", "'full', 'basic', 'minimal'"),
        ],
        used_on: &["settings", "profile edit", "compose", "admin newsletters", "admin pages", "admin blog"],
    },
    ComponentDescriptor {
        id: "search-input",
        name: "Search Input",
        template_path: "forms/search-input",
        description: "Styled search input with icon.",
        props: &[
            prop("name", "string", "'q'", "Input name"),
            prop("value", "string", "''", "Search value"),
            prop("placeholder", "string", "'Search...'", "Placeholder text"),
            prop("autoSubmit", "bool", "true", "Submit on Enter"),
        ],
        used_on: &[],
    },
    ComponentDescriptor {
        id: "search-card",
        name: "Search Card",
        template_path: "forms/search-card",
        description: "Glass search card with search input and filters.",
        props: &[
            prop("title", "string", "'Search'", "Card heading"),
            prop("count", "int", "0", "Item count"),
            prop("countLabel", "string", "'items available'", "Count label"),
            prop("action", "string", "''", "Form action URL"),
            prop("query", "string", "''", "Current search query"),
            prop("filters", "array", "[]", "Filter configs array"),
        ],
        used_on: &[],
    },
];

static BUTTONS: &[ComponentDescriptor] = &[
    ComponentDescriptor {
        id: "button",
        name: "Button",
        template_path: "buttons/button",
        description: "Primary button component with multiple variants and states.",
        props: &[
            prop("label", "string", "''", "Button text"),
            prop("variant", "string", "'primary'", "'primary', 'secondary', 'outline', 'ghost', 'danger'"),
            prop("size", "string", "'md'", "'sm', 'md', 'lg'"),
            prop("icon", "string", "''", "FontAwesome icon"),
            prop("iconPosition", "string", "'left'", "'left' or 'right'"),
            prop("href", "string", "''", "Link URL (renders as <a>)"),
            prop("disabled", "bool", "false", "Disable button"),
            prop("loading", "bool", "false", "Show loading state"),
            prop("fullWidth", "bool", "false", "Full width button"),
        ],
        used_on: &[],
    },
    ComponentDescriptor {
        id: "icon-button",
        name: "Icon Button",
        template_path: "buttons/icon-button",
        description: "Icon-only button with tooltip.",
        props: &[
            prop("icon", "string", "''", "FontAwesome icon name"),
            prop("label", "string", "''", "Tooltip/aria-label"),
            prop("variant", "string", "'default'", "'default', 'primary', 'danger'"),
            prop("size", "string", "'md'", "'sm', 'md', 'lg'"),
        ],
        used_on: &[],
    },
    ComponentDescriptor {
        id: "button-group",
        name: "Button Group",
        template_path: "buttons/button-group",
        description: "Grouped buttons with connected styling.",
        props: &[
            prop("buttons", "array", "[]", "Array of button configs"),
            prop("size", "string", "'md'", "'sm', 'md', 'lg'"),
            prop("vertical", "bool", "false", "Stack vertically"),
        ],
        used_on: &[],
    },
    ComponentDescriptor {
        id: "fab",
        name: "FAB",
        template_path: "buttons/fab",
        description: "Floating Action Button for primary actions.",
        props: &[
            prop("icon", "string", "'plus'", "FontAwesome icon"),
            prop("label", "string", "''", "Tooltip text"),
            prop("position", "string", "'bottom-right'", "Screen position"),
            prop("variant", "string", "'primary'", "Color variant"),
        ],
        used_on: &[],
    },
];

static FEEDBACK: &[ComponentDescriptor] = &[
    ComponentDescriptor {
        id: "alert",
        name: "Alert",
        template_path: "feedback/alert",
        description: "Alert message with icon and optional dismiss button.",
        props: &[
            prop("type", "string", "'info'", "'info', 'success', 'warning', 'danger'"),
            prop("message", "string", "''", "Alert message text"),
            prop("title", "string", "''", "Optional title"),
            prop("dismissible", "bool", "true", "Show dismiss button"),
            prop("icon", "string", "''", "Custom icon (auto if empty)"),
        ],
        used_on: &[],
    },
    ComponentDescriptor {
        id: "empty-state",
        name: "Empty State",
        template_path: "feedback/empty-state",
        description: "Placeholder for empty content areas.",
        props: &[
            prop("icon", "string", "''", "Icon or emoji"),
            prop("title", "string", "''", "Title text"),
            prop("message", "string", "''", "Description text"),
            prop("action", "array", "null", "Action button config"),
        ],
        used_on: &[],
    },
    ComponentDescriptor {
        id: "modal",
        name: "Modal",
        template_path: "feedback/modal",
        description: "Modal dialog overlay.",
        props: &[
            prop("id", "string", "''", "Modal ID for targeting"),
            prop("title", "string", "''", "Modal title"),
            prop("content", "string", "''", "Modal body content"),
            prop("footer", "string", "''", "Footer content"),
            prop("size", "string", "'md'", "'sm', 'md', 'lg', 'xl'"),
        ],
        used_on: &[],
    },
    ComponentDescriptor {
        id: "toast",
        name: "Toast",
        template_path: "feedback/toast",
        description: "Toast notification container.",
        props: &[
            prop("position", "string", "'top-right'", "Screen position"),
        ],
        used_on: &[],
    },
    ComponentDescriptor {
        id: "skeleton",
        name: "Skeleton",
        template_path: "feedback/skeleton",
        description: "Loading skeleton placeholder.",
        props: &[
            prop("type", "string", "'text'", "'text', 'card', 'avatar', 'list'"),
            prop("count", "int", "1", "Number of skeletons"),
            prop("animated", "bool", "true", "Show animation"),
        ],
        used_on: &[],
    },
    ComponentDescriptor {
        id: "loading-spinner",
        name: "Loading Spinner",
        template_path: "feedback/loading-spinner",
        description: "Loading indicator with multiple variants.",
        props: &[
            prop("variant", "string", "'spinner'", "'spinner', 'dots', 'pulse'"),
            prop("size", "string", "'md'", "'sm', 'md', 'lg'"),
            prop("message", "string", "''", "Loading message"),
        ],
        used_on: &[],
    },
];

static MEDIA: &[ComponentDescriptor] = &[
    ComponentDescriptor {
        id: "avatar",
        name: "Avatar",
        template_path: "media/avatar",
        description: "User avatar with fallback to initials.",
        props: &[
            prop("image", "string", "''", "Image URL"),
            prop("name", "string", "'User'", "User name (for initials)"),
            prop("size", "int", "40", "Size in pixels"),
            prop("showRing", "bool", "false", "Show colored ring"),
            prop("status", "string", "null", "'online', 'away', 'offline'"),
        ],
        used_on: &[],
    },
    ComponentDescriptor {
        id: "avatar-stack",
        name: "Avatar Stack",
        template_path: "media/avatar-stack",
        description: "Overlapping avatar group with overflow count.",
        props: &[
            prop("users", "array", "[]", "Array of user objects"),
            prop("max", "int", "3", "Max visible avatars"),
            prop("size", "int", "32", "Avatar size"),
        ],
        used_on: &[],
    },
    ComponentDescriptor {
        id: "badge",
        name: "Badge",
        template_path: "media/badge",
        description: "Small status badge with text and icon.",
        props: &[
            prop("text", "string", "''", "Badge text"),
            prop("variant", "string", "'primary'", "'primary', 'success', 'warning', 'danger', 'info', 'muted'"),
            prop("icon", "string", "''", "FontAwesome icon"),
            prop("pill", "bool", "false", "Pill-shaped badge"),
        ],
        used_on: &[],
    },
    ComponentDescriptor {
        id: "icon",
        name: "Icon",
        template_path: "media/icon",
        description: "FontAwesome icon with configurable size and color.",
        props: &[
            prop("name", "string", "''", "Icon name (without fa-)"),
            prop("size", "string", "'md'", "'xs', 'sm', 'md', 'lg', 'xl'"),
            prop("color", "string", "''", "Color variant or CSS color"),
            prop("type", "string", "'solid'", "'solid', 'regular', 'brands'"),
        ],
        used_on: &[],
    },
    ComponentDescriptor {
        id: "image",
        name: "Image",
        template_path: "media/image",
        description: "Responsive image with lazy loading and fallback.",
        props: &[
            prop("src", "string", "''", "Image source URL"),
            prop("alt", "string", "''", "Alt text"),
            prop("aspectRatio", "string", "''", "'16/9', '4/3', '1/1'"),
            prop("lazy", "bool", "true", "Lazy load image"),
        ],
        used_on: &[],
    },
    ComponentDescriptor {
        id: "gallery",
        name: "Gallery",
        template_path: "media/gallery",
        description: "Image gallery with lightbox and carousel modes.",
        props: &[
            prop("images", "array", "[]", "Images: ['src', 'alt', 'caption']"),
            prop("variant", "string", "'grid'", "'grid', 'carousel', 'masonry'"),
            prop("columns", "int", "3", "Grid columns"),
            prop("lightbox", "bool", "true", "Enable lightbox"),
            prop("showCaptions", "bool", "false", "Show captions"),
            prop("autoplay", "bool", "false", "Autoplay carousel"),
        ],
        used_on: &["home", "feed", "members", "federation", "listings", "blog", "admin dashboards"],
    },
    ComponentDescriptor {
        id: "video-embed",
        name: "Video Embed",
        template_path: "media/video-embed",
        description: "Embed video from YouTube, Vimeo, or direct URL.",
        props: &[
            prop("url", "string", "''", "Video URL"),
            prop("title", "string", "'Embedded video'", "Accessibility title"),
            prop("aspectRatio", "string", "'16:9'", "'16:9', '4:3', '1:1', '21:9'"),
            prop("autoplay", "bool", "false", "Autoplay video"),
            prop("controls", "bool", "true", "Show controls"),
            prop("lazy", "bool", "true", "Lazy load"),
        ],
        used_on: &["feed", "compose", "resources", "admin pages builder", "newsletter forms"],
    },
    ComponentDescriptor {
        id: "code-block",
        name: "Code Block",
        template_path: "media/code-block",
        description: "Syntax-highlighted code display with copy button.",
        props: &[
            prop("code", "string", "''", "Code content (required)"),
            prop("language", "string", "'text'", "Language for highlighting"),
            prop("title", "string", "''", "Block title/filename"),
            prop("showLineNumbers", "bool", "true", "Show line numbers"),
            prop("showCopy", "bool", "true", "Show copy button"),
            prop("wrap", "bool", "false", "Wrap long lines"),
        ],
        used_on: &["master dashboard", "admin pages builder", "native app", "cron setup"],
    },
];

static DATA: &[ComponentDescriptor] = &[
    ComponentDescriptor {
        id: "progress-bar",
        name: "Progress Bar",
        template_path: "data/progress-bar",
        description: "Horizontal progress indicator.",
        props: &[
            prop("percent", "int|float", "0", "Progress percentage (0-100)"),
            prop("label", "string", "''", "Label text"),
            prop("showPercent", "bool", "true", "Show percentage text"),
            prop("color", "string", "'primary'", "'primary', 'success', 'warning', 'danger'"),
            prop("size", "string", "'md'", "'sm', 'md', 'lg'"),
            prop("striped", "bool", "false", "Show stripe pattern"),
            prop("animated", "bool", "false", "Animate stripes"),
        ],
        used_on: &[],
    },
    ComponentDescriptor {
        id: "stat",
        name: "Stat",
        template_path: "data/stat",
        description: "Single statistic display with trend.",
        props: &[
            prop("value", "string", "'0'", "Stat value"),
            prop("label", "string", "''", "Stat label"),
            prop("icon", "string", "''", "FontAwesome icon"),
            prop("trend", "string", "null", "'up', 'down', or null"),
            prop("trendValue", "string", "''", "Change value"),
        ],
        used_on: &[],
    },
    ComponentDescriptor {
        id: "leaderboard",
        name: "Leaderboard",
        template_path: "data/leaderboard",
        description: "Ranked list with user avatars and scores.",
        props: &[
            prop("users", "array", "[]", "Array of user data"),
            prop("metric", "string", "'points'", "Metric label"),
            prop("highlightUserId", "int", "null", "User ID to highlight"),
            prop("limit", "int", "10", "Max entries to show"),
        ],
        used_on: &[],
    },
    ComponentDescriptor {
        id: "table",
        name: "Table",
        template_path: "data/table",
        description: "Data table with optional sorting and styling.",
        props: &[
            prop("headers", "array", "[]", "Array of header configs"),
            prop("rows", "array", "[]", "Array of row data"),
            prop("variant", "string", "'default'", "'default', 'striped', 'bordered'"),
            prop("hoverable", "bool", "true", "Add hover effect"),
            prop("compact", "bool", "false", "Compact spacing"),
        ],
        used_on: &[],
    },
    ComponentDescriptor {
        id: "list",
        name: "List",
        template_path: "data/list",
        description: "Styled list with icons and actions.",
        props: &[
            prop("items", "array", "[]", "List items array"),
            prop("variant", "string", "'default'", "'default', 'divided', 'compact'"),
            prop("hoverable", "bool", "true", "Add hover effect"),
        ],
        used_on: &[],
    },
    ComponentDescriptor {
        id: "timeline-item",
        name: "Timeline Item",
        template_path: "data/timeline-item",
        description: "Single item in a vertical timeline.",
        props: &[
            prop("icon", "string", "''", "FontAwesome icon"),
            prop("title", "string", "''", "Item title"),
            prop("content", "string", "''", "Item content"),
            prop("time", "string", "''", "Timestamp"),
            prop("variant", "string", "'default'", "'default', 'success', 'warning'"),
        ],
        used_on: &["admin/activity_log", "organizations/audit-log", "federation/activity"],
    },
];

static INTERACTIVE: &[ComponentDescriptor] = &[
    ComponentDescriptor {
        id: "accordion",
        name: "Accordion",
        template_path: "interactive/accordion",
        description: "Collapsible accordion sections.",
        props: &[
            prop("items", "array", "[]", "Array of ['id', 'title', 'content', 'icon', 'expanded']"),
            prop("allowMultiple", "bool", "false", "Allow multiple open sections"),
            prop("variant", "string", "'default'", "'default', 'bordered', 'separated'"),
        ],
        used_on: &["FAQ pages", "settings", "badge showcases", "form sections"],
    },
    ComponentDescriptor {
        id: "tooltip",
        name: "Tooltip",
        template_path: "interactive/tooltip",
        description: "Hover tooltip for additional info.",
        props: &[
            prop("content", "string", "''", "Tooltip content"),
            prop("position", "string", "'top'", "'top', 'bottom', 'left', 'right'"),
            prop("trigger", "string", "''", "Trigger element HTML"),
        ],
        used_on: &["messages", "admin dashboard", "federation analytics", "pages builder"],
    },
    ComponentDescriptor {
        id: "copy-button",
        name: "Copy Button",
        template_path: "interactive/copy-button",
        description: "Button to copy text to clipboard.",
        props: &[
            prop("text", "string", "''", "Text to copy"),
            prop("label", "string", "'Copy'", "Button label"),
            prop("successLabel", "string", "'Copied!'", "Success message"),
        ],
        used_on: &["post cards", "blog", "admin settings", "pages builder", "auth login"],
    },
    ComponentDescriptor {
        id: "share-button",
        name: "Share Button",
        template_path: "interactive/share-button",
        description: "Social sharing button with dropdown.",
        props: &[
            prop("url", "string", "''", "URL to share"),
            prop("title", "string", "''", "Share title"),
            prop("networks", "array", "['twitter', 'facebook', 'linkedin']", "Social networks"),
        ],
        used_on: &["post cards", "blog", "pages builder", "auth login"],
    },
    ComponentDescriptor {
        id: "star-rating",
        name: "Star Rating",
        template_path: "interactive/star-rating",
        description: "Interactive star rating input.",
        props: &[
            prop("value", "int", "0", "Current rating (0-5)"),
            prop("readonly", "bool", "false", "Read-only mode"),
            prop("size", "string", "'md'", "'sm', 'md', 'lg'"),
        ],
        used_on: &["reviews/create", "federation/review-form", "profile reviews"],
    },
    ComponentDescriptor {
        id: "poll-voting",
        name: "Poll Voting",
        template_path: "interactive/poll-voting",
        description: "Poll with voting options and results.",
        props: &[
            prop("options", "array", "[]", "Poll options array"),
            prop("showResults", "bool", "false", "Show results"),
            prop("userVote", "int", "null", "User's vote ID"),
        ],
        used_on: &["polls/show", "polls embedded in feed"],
    },
    ComponentDescriptor {
        id: "draggable-list",
        name: "Draggable List",
        template_path: "interactive/draggable-list",
        description: "Sortable/draggable list for reordering items.",
        props: &[
            prop("items", "array", "[]", "Items: ['id', 'content', 'data']"),
            prop("name", "string", "'order'", "Hidden input name"),
            prop("showHandle", "bool", "true", "Show drag handle"),
            prop("showRemove", "bool", "false", "Show remove button"),
            prop("variant", "string", "'default'", "'default', 'cards', 'compact'"),
        ],
        used_on: &["admin menus builder", "pages create", "newsletters", "blog builder"],
    },
];

static SOCIAL: &[ComponentDescriptor] = &[
    ComponentDescriptor {
        id: "comment-section",
        name: "Comment Section",
        template_path: "social/comment-section",
        description: "Complete comment section with form and list.",
        props: &[
            prop("contentType", "string", "'post'", "Content type identifier"),
            prop("contentId", "int", "0", "Content ID"),
            prop("comments", "array", "[]", "Comments array"),
            prop("currentUser", "array", "[]", "Current user data"),
            prop("allowReplies", "bool", "true", "Allow nested replies"),
        ],
        used_on: &["feed/show", "polls/show", "events/show", "listings/show", "volunteering/show", "goals/show", "groups/show"],
    },
    ComponentDescriptor {
        id: "notification-item",
        name: "Notification Item",
        template_path: "social/notification-item",
        description: "Single notification list item.",
        props: &[
            prop("notification", "array", "[]", "Notification data"),
            prop("unread", "bool", "false", "Unread state"),
        ],
        used_on: &["notifications/index", "dashboard notifications"],
    },
    ComponentDescriptor {
        id: "profile-header",
        name: "Profile Header",
        template_path: "social/profile-header",
        description: "User profile header with stats and actions.",
        props: &[
            prop("user", "array", "[]", "User data object"),
            prop("isOwn", "bool", "false", "Is own profile"),
            prop("stats", "array", "[]", "Profile stats"),
        ],
        used_on: &["profile/show", "federation/member-profile", "federation/partner-profile"],
    },
];

static SHARED: &[ComponentDescriptor] = &[
    ComponentDescriptor {
        id: "accessibility-helpers",
        name: "Accessibility Helpers",
        template_path: "shared/accessibility-helpers",
        description: "Reusable accessibility utilities (functions file).",
        props: &[
            prop("renderSkipLink()", "function", "-", "Renders skip to main content link"),
            prop("srOnly($text)", "function", "-", "Returns screen reader only span"),
            prop("iconButton(...)", "function", "-", "Renders accessible icon button"),
            prop("iconLink(...)", "function", "-", "Renders accessible icon link"),
        ],
        used_on: &[],
    },
    ComponentDescriptor {
        id: "post-card",
        name: "Post Card",
        template_path: "shared/post-card",
        description: "Reusable post display for feed, profile views.",
        props: &[
            prop("post", "array", "[]", "Post data (required)"),
            prop("postAuthor", "array", "[]", "Author data (required)"),
            prop("currentUserId", "int", "session", "Current user ID"),
            prop("showActions", "bool", "true", "Show like/comment/share"),
        ],
        used_on: &[],
    },
];

static NEXUS: &[ComponentDescriptor] = &[
    ComponentDescriptor {
        id: "achievement-showcase",
        name: "Achievement Showcase",
        template_path: "achievement-showcase",
        description: "Visual display of badges, achievements, milestones.",
        props: &[
            prop("badges", "array", "[]", "User's earned badges"),
            prop("milestones", "array", "[]", "Completed milestones"),
            prop("recentAchievements", "array", "[]", "Recent achievements"),
            prop("isPublic", "bool", "false", "Public profile view"),
        ],
        used_on: &[],
    },
    ComponentDescriptor {
        id: "nexus-leaderboard",
        name: "Nexus Leaderboard",
        template_path: "nexus-leaderboard",
        description: "Community ranking and comparison features.",
        props: &[
            prop("leaderboardData", "array", "[]", "Top users/orgs by score"),
            prop("currentUserData", "array", "[]", "Current user's rank/score"),
            prop("timeframe", "string", "'all-time'", "'weekly', 'monthly', 'all-time'"),
            prop("category", "string", "'overall'", "'overall', 'engagement', etc."),
        ],
        used_on: &[],
    },
    ComponentDescriptor {
        id: "nexus-score-widget",
        name: "Nexus Score Widget",
        template_path: "nexus-score-widget",
        description: "Compact widget for profile score display.",
        props: &[
            prop("userId", "int", "session", "User ID to display"),
            prop("tenantId", "int", "session", "Tenant ID"),
            prop("isOwner", "bool", "false", "Viewing own profile"),
        ],
        used_on: &[],
    },
    ComponentDescriptor {
        id: "nexus-score-dashboard",
        name: "Nexus Score Dashboard",
        template_path: "nexus-score-dashboard",
        description: "Full dashboard with score breakdown.",
        props: &[
            prop("userId", "int", "session", "User ID"),
            prop("tenantId", "int", "session", "Tenant ID"),
        ],
        used_on: &[],
    },
    ComponentDescriptor {
        id: "nexus-score-charts",
        name: "Nexus Score Charts",
        template_path: "nexus-score-charts",
        description: "Score visualization with charts.",
        props: &[
            prop("scoreData", "array", "[]", "Score data for charts"),
        ],
        used_on: &[],
    },
    ComponentDescriptor {
        id: "org-ui-components",
        name: "Org UI Components",
        template_path: "org-ui-components",
        description: "Shared UI: modals, toasts, loaders for organizations.",
        props: &[
            prop("-", "includes", "-", "Include once in layout for modal/toast system"),
        ],
        used_on: &[],
    },
];
