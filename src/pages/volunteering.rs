//! Volunteering pages: listing, opportunity detail, organisation dashboard,
//! hours certificate and shift calendar export.

use axum::{
    Router,
    extract::{Path, Query, State},
    http::header,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;

use super::ics::{self, CalendarEvent};
use super::shell::{PageShell, app_page};
use crate::AppState;
use crate::components::buttons::{ButtonProps, ButtonVariant, button};
use crate::components::cards::{OpportunitySummary, VolunteerCardProps, volunteer_card};
use crate::components::feedback::{AlertProps, AlertType, EmptyStateProps, alert, empty_state};
use crate::components::forms::{SearchInputProps, search_input};
use crate::components::layout::{HeroBadge, HeroProps, hero};
use crate::components::media::{BadgeProps, BadgeVariant, badge};
use crate::components::{Link, format_number};
use crate::error::AppError;
use crate::markup::{Element, Markup, el, icon};
use crate::security::RequestContext;
use crate::volunteering::{
    ApplicationRow, ApplicationStatus, Opportunity, OpportunityListing, OrgHours, OrgStatus,
    Organization, Shift,
};

const FEATURE: &str = "volunteering";

const ENGAGEMENT_SCRIPT: &str = r"
(function () {
    const root = document.getElementById('volEngagement');
    if (!root) { return; }
    const api = root.dataset.api;
    const payload = { target_type: 'volunteering', target_id: Number(root.dataset.targetId) };

    async function post(action, body) {
        if (root.dataset.signedIn !== 'true') {
            window.location.href = root.dataset.login;
            return null;
        }
        if (!navigator.onLine) {
            window.showToast('You are offline. Please reconnect and try again.', 'warning');
            return null;
        }
        try {
            const res = await fetch(api + '/' + action, {
                method: 'POST',
                headers: { 'Content-Type': 'application/json' },
                body: JSON.stringify(Object.assign({}, payload, body || {}))
            });
            const data = await res.json();
            if (data.error) { window.showToast(data.error, 'danger'); return null; }
            return data;
        } catch (err) {
            window.showToast('Something went wrong. Please try again.', 'danger');
            return null;
        }
    }

    root.querySelector('[data-action=like]').addEventListener('click', async function () {
        const btn = this;
        const data = await post('like');
        if (!data) { return; }
        btn.classList.toggle('is-active', data.status === 'liked');
        root.querySelector('[data-count=likes]').textContent = data.likes_count;
    });

    root.querySelector('[data-action=comment]').addEventListener('click', function () {
        const section = document.getElementById('volComments');
        section.hidden = !section.hidden;
        if (!section.hidden) { section.querySelector('textarea').focus(); }
    });

    root.querySelector('[data-action=submit-comment]').addEventListener('click', async function () {
        const field = document.querySelector('#volComments textarea');
        const content = field.value.trim();
        if (!content) { return; }
        const data = await post('comment', { content: content });
        if (!data) { return; }
        field.value = '';
        root.querySelector('[data-count=comments]').textContent = data.comments_count;
        window.showToast('Comment posted', 'success');
    });
})();";

const CERTIFICATE_CSS: &str = r"
.certificate { max-width: 820px; margin: 40px auto; padding: 56px 64px; background: #fff;
    border: 12px double #4f46e5; text-align: center; font-family: Georgia, serif; }
.certificate__title { font-size: 2.4rem; letter-spacing: .08em; text-transform: uppercase; margin: 0 0 8px; }
.certificate__subtitle { color: #6b7280; margin: 0 0 32px; }
.certificate__name { font-size: 2rem; margin: 16px 0; color: #4f46e5; }
.certificate__body { font-size: 1.1rem; line-height: 1.7; }
.certificate__breakdown { margin: 24px auto; border-collapse: collapse; }
.certificate__breakdown td { padding: 4px 16px; border-bottom: 1px solid #e5e7eb; text-align: left; }
.certificate__footer { display: flex; justify-content: space-between; margin-top: 48px; color: #374151; }
.certificate__actions { text-align: center; margin: 24px 0; }
@media print { .certificate__actions { display: none; } body { background: #fff; } }";

const PRINT_SCRIPT: &str = r"
document.getElementById('printCertificate')?.addEventListener('click', function () { window.print(); });";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/volunteering", get(index))
        .route("/volunteering/dashboard", get(dashboard))
        .route("/volunteering/certificate", get(certificate))
        .route("/volunteering/applications/{id}/ics", get(calendar_export))
        .route("/volunteering/{id}", get(show))
}

fn require_feature(ctx: &RequestContext) -> Result<(), AppError> {
    if ctx.has_feature(FEATURE) {
        Ok(())
    } else {
        Err(AppError::FeatureDisabled("Volunteering".into()))
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct DetailQuery {
    pub msg: Option<String>,
}

// =============================================================================
// Listing
// =============================================================================

async fn index(
    ctx: RequestContext,
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> Result<Html<String>, AppError> {
    require_feature(&ctx)?;
    let needle = query.q.trim();
    let listings = state.volunteering.search(ctx.tenant_id, needle).await?;
    tracing::debug!(query = needle, results = listings.len(), "Volunteering search");
    Ok(app_page(&ctx, "Volunteering", listing_body(&ctx, needle, &listings)))
}

fn summary(ctx: &RequestContext, listing: &OpportunityListing) -> OpportunitySummary {
    let opp = &listing.opportunity;
    OpportunitySummary {
        id: opp.id,
        title: opp.title.clone(),
        organization: listing.org_name.clone(),
        location: opp.location.clone().unwrap_or_default(),
        description: opp.description.clone(),
        hours_needed: opp.hours_needed,
        is_remote: opp.location.as_deref().is_none_or(|l| l.trim().is_empty()),
        url: ctx.url(&format!("/volunteering/{}", opp.id)),
    }
}

fn listing_body(ctx: &RequestContext, query: &str, listings: &[OpportunityListing]) -> Markup {
    let mut hero_buttons = Vec::new();
    if ctx.is_signed_in() {
        hero_buttons.push(ButtonProps {
            href: ctx.url("/volunteering/dashboard"),
            icon: "gauge".into(),
            variant: ButtonVariant::Secondary,
            ..ButtonProps::labelled("Organisation Dashboard")
        });
    }

    let search = el("form")
        .class("vol-search")
        .attr("method", "get")
        .attr("action", ctx.url("/volunteering"))
        .attr("role", "search")
        .child(search_input(&SearchInputProps {
            value: query.to_string(),
            placeholder: "Search opportunities, organisations or places...".into(),
            ..SearchInputProps::default()
        }))
        .child(button(&ButtonProps {
            button_type: "submit".into(),
            icon: "magnifying-glass".into(),
            ..ButtonProps::labelled("Search")
        }));

    let results = if listings.is_empty() {
        let (title, message) = if query.is_empty() {
            (
                "No opportunities yet",
                "Check back soon for new ways to help your community.".to_string(),
            )
        } else {
            (
                "No opportunities found",
                format!("Nothing matches \u{201c}{query}\u{201d}. Try a different search."),
            )
        };
        empty_state(&EmptyStateProps {
            icon: "hand-holding-heart".into(),
            title: title.into(),
            message,
            action: (!query.is_empty()).then(|| Link {
                label: "Clear search".into(),
                href: ctx.url("/volunteering"),
                icon: "xmark".into(),
            }),
        })
    } else {
        el("div")
            .class("vol-grid")
            .children(listings.iter().map(|listing| {
                volunteer_card(&VolunteerCardProps {
                    opportunity: summary(ctx, listing),
                    show_org: true,
                })
            }))
            .into()
    };

    let count = match listings.len() {
        1 => "1 opportunity".to_string(),
        n => format!("{n} opportunities"),
    };

    Markup::Fragment(vec![
        hero(&HeroProps {
            title: "Volunteer Opportunities".into(),
            subtitle: "Give your time to local causes and make a difference.".into(),
            icon: "hand-holding-heart".into(),
            badge: Some(HeroBadge {
                icon: "heart".into(),
                text: "Community".into(),
            }),
            buttons: hero_buttons,
            ..HeroProps::default()
        }),
        el("section").class("vol-search-card").child(search).into(),
        el("p").class("vol-results-count").text(count).into(),
        results,
    ])
}

// =============================================================================
// Opportunity detail
// =============================================================================

/// What the apply sidebar shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ApplyState {
    JustApplied,
    AlreadyApplied,
    CanApply,
    SignedOut,
}

async fn show(
    ctx: RequestContext,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<DetailQuery>,
) -> Result<Html<String>, AppError> {
    require_feature(&ctx)?;
    let not_found = || AppError::NotFound("Opportunity not found".into());
    let id: i64 = id.parse().ok().ok_or_else(not_found)?;
    let listing = state
        .volunteering
        .find(ctx.tenant_id, id)
        .await?
        .ok_or_else(not_found)?;
    let shifts = state.volunteering.shifts(id).await?;

    let apply = if query.msg.as_deref() == Some("applied") {
        ApplyState::JustApplied
    } else if let Some(user_id) = ctx.user_id() {
        if state.volunteering.has_applied(id, user_id).await? {
            ApplyState::AlreadyApplied
        } else {
            ApplyState::CanApply
        }
    } else {
        ApplyState::SignedOut
    };

    let title = listing.opportunity.title.clone();
    let body = detail_body(&ctx, &listing, &shifts, apply);
    Ok(app_page(&ctx, &title, Markup::Fragment(vec![
        body,
        el("script").raw(ENGAGEMENT_SCRIPT).into(),
    ])))
}

/// Only absolute http(s) URLs are linked.
fn website_href(website: Option<&str>) -> Option<String> {
    let parsed = url::Url::parse(website?.trim()).ok()?;
    matches!(parsed.scheme(), "http" | "https").then(|| parsed.to_string())
}

/// Escaped text with line breaks kept.
fn paragraphs(text: &str) -> Markup {
    let mut nodes = Vec::new();
    for (i, line) in text.lines().enumerate() {
        if i > 0 {
            nodes.push(el("br").into());
        }
        nodes.push(Markup::text(line));
    }
    Markup::Fragment(nodes)
}

fn date_range(opp: &Opportunity) -> String {
    match (opp.start_date, opp.end_date) {
        (Some(start), Some(end)) => {
            format!("{} - {}", start.format("%b %d, %Y"), end.format("%b %d, %Y"))
        }
        (Some(start), None) => format!("{} (Ongoing)", start.format("%b %d, %Y")),
        (None, _) => "Flexible".into(),
    }
}

fn shift_time(shift: &Shift) -> String {
    format!(
        "{} - {}",
        shift.start_time.format("%-I:%M %p"),
        shift.end_time.format("%-I:%M %p")
    )
}

fn detail_body(
    ctx: &RequestContext,
    listing: &OpportunityListing,
    shifts: &[Shift],
    apply: ApplyState,
) -> Markup {
    let opp = &listing.opportunity;
    let location = opp
        .location
        .as_deref()
        .filter(|l| !l.trim().is_empty())
        .unwrap_or("Remote");

    let website = website_href(listing.org_website.as_deref()).map(|href| {
        Markup::from(
            el("a")
                .class("vol-detail__website")
                .attr("href", href)
                .attr("target", "_blank")
                .attr("rel", "noopener noreferrer")
                .child(icon("globe"))
                .text("Visit website"),
        )
    });

    let header = el("header")
        .class("vol-detail__header")
        .child(
            el("a")
                .class("vol-detail__back")
                .attr("href", ctx.url("/volunteering"))
                .child(icon("arrow-left"))
                .text("All opportunities"),
        )
        .child(badge(&BadgeProps {
            text: "Volunteering Opportunity".into(),
            variant: BadgeVariant::Primary,
            icon: "hand-holding-heart".into(),
            pill: true,
        }))
        .child(
            el("p")
                .class("vol-detail__location")
                .child(icon("location-dot"))
                .text(location),
        )
        .child(el("h1").class("vol-detail__title").text(opp.title.as_str()))
        .child(
            el("p")
                .class("vol-detail__org")
                .child(icon("building"))
                .text(listing.org_name.as_str())
                .child(website),
        );

    let skills: Markup = if opp.skills_needed.is_empty() {
        el("p").class("vol-detail__muted").text("None specified").into()
    } else {
        el("div")
            .class("vol-detail__skills")
            .children(opp.skills_needed.iter().map(|skill| {
                badge(&BadgeProps {
                    text: skill.clone(),
                    variant: BadgeVariant::Info,
                    pill: true,
                    ..BadgeProps::default()
                })
            }))
            .into()
    };

    let hours = opp.hours_needed.map(|h| {
        Markup::from(
            el("li")
                .child(icon("clock"))
                .text(format!("{} hours needed", format_number(h))),
        )
    });

    let main = el("article")
        .class("vol-detail__main")
        .child(header)
        .child(
            el("section")
                .class("vol-detail__section")
                .child(el("h2").text("About this opportunity"))
                .child(el("p").class("vol-detail__description").child(paragraphs(&opp.description))),
        )
        .child(
            el("section")
                .class("vol-detail__section")
                .child(el("h2").text("Skills Needed"))
                .child(skills),
        )
        .child(
            el("section")
                .class("vol-detail__section")
                .child(el("h2").text("Dates"))
                .child(
                    el("ul")
                        .class("vol-detail__facts")
                        .child(el("li").child(icon("calendar")).text(date_range(opp)))
                        .child(hours),
                ),
        )
        .child(shifts_table(shifts))
        .child(engagement(ctx, opp.id));

    let sidebar = el("aside")
        .class("vol-detail__sidebar")
        .child(
            el("div")
                .class("vol-detail__org-card")
                .child(el("h3").text(listing.org_name.as_str()))
                .child(el("p").class("vol-detail__muted").text("Organiser")),
        )
        .child(apply_panel(ctx, opp.id, shifts, apply));

    el("div")
        .class("vol-detail")
        .child(main)
        .child(sidebar)
        .into()
}

fn shifts_table(shifts: &[Shift]) -> Markup {
    if shifts.is_empty() {
        return Markup::empty();
    }
    let rows = shifts.iter().map(|shift| {
        el("tr")
            .child(el("td").text(shift.start_time.format("%a %b %d").to_string()))
            .child(el("td").text(shift_time(shift)))
            .child(el("td").text(format!("{} spots", shift.capacity)))
    });

    el("section")
        .class("vol-detail__section")
        .child(el("h2").text("Shifts"))
        .child(
            el("table")
                .class("nexus-table")
                .child(el("thead").child(
                    el("tr")
                        .child(el("th").attr("scope", "col").text("Date"))
                        .child(el("th").attr("scope", "col").text("Time"))
                        .child(el("th").attr("scope", "col").text("Capacity")),
                ))
                .child(el("tbody").children(rows)),
        )
        .into()
}

fn engagement(ctx: &RequestContext, opportunity_id: i64) -> Markup {
    let action = |name: &str, icon_name: &str, label: &str, count: &str| -> Element {
        el("button")
            .attr("type", "button")
            .class("vol-engagement__btn")
            .attr("data-action", name.to_string())
            .child(icon(icon_name))
            .child(el("span").text(label.to_string()))
            .child(
                el("span")
                    .class("vol-engagement__count")
                    .attr("data-count", count.to_string())
                    .text("0"),
            )
    };

    Markup::Fragment(vec![
        el("div")
            .class("vol-engagement")
            .attr("id", "volEngagement")
            .attr("data-api", ctx.url("/api/social"))
            .attr("data-target-id", opportunity_id)
            .attr("data-signed-in", if ctx.is_signed_in() { "true" } else { "false" })
            .attr("data-login", ctx.url("/login"))
            .child(action("like", "heart", "Like", "likes"))
            .child(action("comment", "comment", "Comment", "comments"))
            .into(),
        el("section")
            .class("vol-comments")
            .attr("id", "volComments")
            .flag("hidden", true)
            .child(
                el("textarea")
                    .attr("rows", 3)
                    .attr("aria-label", "Comment")
                    .attr("placeholder", "Write a comment..."),
            )
            .child(
                el("button")
                    .attr("type", "button")
                    .class("nexus-btn nexus-btn--primary nexus-btn--sm")
                    .attr("data-action", "submit-comment")
                    .text("Post"),
            )
            .into(),
    ])
}

fn apply_panel(
    ctx: &RequestContext,
    opportunity_id: i64,
    shifts: &[Shift],
    apply: ApplyState,
) -> Markup {
    match apply {
        ApplyState::JustApplied => alert(&AlertProps {
            alert_type: AlertType::Success,
            title: "Application Sent!".into(),
            message: "The organiser will be in touch soon.".into(),
            dismissible: false,
            ..AlertProps::default()
        }),
        ApplyState::AlreadyApplied => el("div")
            .class("vol-apply vol-apply--done")
            .child(badge(&BadgeProps {
                text: "Already Applied".into(),
                variant: BadgeVariant::Success,
                icon: "check".into(),
                pill: true,
            }))
            .child(el("p").text("You've applied for this opportunity."))
            .into(),
        ApplyState::SignedOut => el("div")
            .class("vol-apply")
            .child(el("p").text("Sign in to apply for this opportunity."))
            .child(button(&ButtonProps {
                href: ctx.url("/login"),
                icon: "right-to-bracket".into(),
                full_width: true,
                ..ButtonProps::labelled("Login to Apply")
            }))
            .into(),
        ApplyState::CanApply => {
            let shift_choices = (!shifts.is_empty()).then(|| {
                Markup::from(
                    el("fieldset")
                        .class("vol-apply__shifts")
                        .child(el("legend").text("Choose a shift"))
                        .children(shifts.iter().enumerate().map(|(i, shift)| {
                            el("label")
                                .class("vol-apply__shift")
                                .child(
                                    el("input")
                                        .attr("type", "radio")
                                        .attr("name", "shift_id")
                                        .attr("value", shift.id)
                                        .flag("required", true)
                                        .flag("checked", i == 0),
                                )
                                .child(
                                    el("span")
                                        .class("vol-apply__shift-date")
                                        .text(shift.start_time.format("%b %d").to_string()),
                                )
                                .child(el("span").text(shift_time(shift)))
                                .child(
                                    el("span")
                                        .class("vol-apply__shift-capacity")
                                        .text(format!("{} spots", shift.capacity)),
                                )
                        })),
                )
            });

            el("form")
                .class("vol-apply")
                .attr("method", "post")
                .attr("action", ctx.url("/volunteering/apply"))
                .child(
                    el("input")
                        .attr("type", "hidden")
                        .attr("name", "opportunity_id")
                        .attr("value", opportunity_id),
                )
                .child(shift_choices)
                .child(
                    el("label")
                        .attr("for", "applyMessage")
                        .class("vol-apply__label")
                        .text("Message"),
                )
                .child(
                    el("textarea")
                        .attr("id", "applyMessage")
                        .attr("name", "message")
                        .attr("rows", 4)
                        .attr("placeholder", "Tell them why you'd like to volunteer..."),
                )
                .child(button(&ButtonProps {
                    button_type: "submit".into(),
                    icon: "paper-plane".into(),
                    full_width: true,
                    ..ButtonProps::labelled("Apply Now")
                }))
                .into()
        }
    }
}

// =============================================================================
// Organisation dashboard
// =============================================================================

/// Everything the dashboard lists for one owner.
#[derive(Debug, Default)]
struct DashboardData {
    organizations: Vec<Organization>,
    opportunities: Vec<(Opportunity, String)>,
    applications: Vec<(ApplicationRow, String)>,
}

async fn dashboard(
    ctx: RequestContext,
    State(state): State<AppState>,
) -> Result<Html<String>, AppError> {
    require_feature(&ctx)?;
    let login = || AppError::LoginRequired {
        location: ctx.url("/login"),
    };
    let user_id = ctx.user_id().ok_or_else(login)?;
    let user = state.volunteering.user(user_id).await?.ok_or_else(login)?;

    let source = &state.volunteering;
    let mut data = DashboardData {
        organizations: source.organizations_by_owner(ctx.tenant_id, user_id).await?,
        ..DashboardData::default()
    };
    for org in &data.organizations {
        for opp in source.opportunities_for_org(org.id).await? {
            for row in source.applications_for_opportunity(opp.id).await? {
                data.applications.push((row, opp.title.clone()));
            }
            data.opportunities.push((opp, org.name.clone()));
        }
    }
    data.applications
        .sort_by(|a, b| b.0.application.created_at.cmp(&a.0.application.created_at));

    Ok(app_page(
        &ctx,
        "Organisation Dashboard",
        dashboard_body(&ctx, &user.display_name(), &data),
    ))
}

fn status_badge(status: ApplicationStatus) -> Markup {
    let variant = match status {
        ApplicationStatus::Approved => BadgeVariant::Success,
        ApplicationStatus::Declined => BadgeVariant::Danger,
        ApplicationStatus::Pending => BadgeVariant::Warning,
    };
    el("span")
        .class(format!("vol-status vol-status--{}", status.as_str()))
        .child(badge(&BadgeProps {
            text: crate::components::ucfirst(status.as_str()),
            variant,
            pill: true,
            ..BadgeProps::default()
        }))
        .into()
}

fn table(headers: &[&str], rows: Vec<Element>) -> Element {
    el("table")
        .class("nexus-table")
        .child(el("thead").child(el("tr").children(
            headers
                .iter()
                .map(|h| el("th").attr("scope", "col").text(*h)),
        )))
        .child(el("tbody").children(rows))
}

fn dashboard_body(ctx: &RequestContext, user_name: &str, data: &DashboardData) -> Markup {
    let header = el("header")
        .class("vol-dashboard__header")
        .child(el("h1").text("Organisation Dashboard"))
        .child(el("p").class("vol-detail__muted").text(format!("Welcome back, {user_name}")));

    if data.organizations.is_empty() {
        return Markup::Fragment(vec![
            header.into(),
            empty_state(&EmptyStateProps {
                icon: "building".into(),
                title: "No organisation yet".into(),
                message: "Register an organisation to start posting opportunities.".into(),
                action: Some(Link {
                    label: "Browse opportunities".into(),
                    href: ctx.url("/volunteering"),
                    icon: "magnifying-glass".into(),
                }),
            }),
        ]);
    }

    let pending = data
        .organizations
        .iter()
        .any(|org| org.status == OrgStatus::Pending)
        .then(|| {
            alert(&AlertProps {
                alert_type: AlertType::Warning,
                message: "Your organization is under review. You can create opportunities, \
                          but they won't be public until approved."
                    .into(),
                dismissible: false,
                ..AlertProps::default()
            })
        });

    let orgs = el("ul").class("vol-dashboard__orgs").children(data.organizations.iter().map(
        |org| {
            let variant = match org.status {
                OrgStatus::Approved => BadgeVariant::Success,
                OrgStatus::Pending => BadgeVariant::Warning,
            };
            el("li")
                .child(icon("building"))
                .child(el("strong").text(org.name.as_str()))
                .child(badge(&BadgeProps {
                    text: if org.status == OrgStatus::Approved {
                        "Approved".into()
                    } else {
                        "Pending".into()
                    },
                    variant,
                    pill: true,
                    ..BadgeProps::default()
                }))
        },
    ));

    let opportunities: Markup = if data.opportunities.is_empty() {
        el("p").class("vol-detail__muted").text("No opportunities posted yet.").into()
    } else {
        table(
            &["Title", "Organisation", "Posted", "Actions"],
            data.opportunities
                .iter()
                .map(|(opp, org_name)| {
                    el("tr")
                        .child(el("td").text(opp.title.as_str()))
                        .child(el("td").text(org_name.as_str()))
                        .child(el("td").text(opp.created_at.format("%b %d, %Y").to_string()))
                        .child(
                            el("td").child(
                                el("a")
                                    .attr("href", ctx.url(&format!("/volunteering/{}", opp.id)))
                                    .text("View"),
                            ),
                        )
                })
                .collect(),
        )
        .into()
    };

    let applications: Markup = if data.applications.is_empty() {
        el("p").class("vol-detail__muted").text("No applications yet.").into()
    } else {
        table(
            &["Volunteer", "Opportunity", "Status", "Message", "Date", "Action"],
            data.applications
                .iter()
                .map(|(row, opp_title)| application_row(row, opp_title))
                .collect(),
        )
        .into()
    };

    Markup::Fragment(vec![
        header.into(),
        pending.into(),
        el("section")
            .class("vol-dashboard__section")
            .child(el("h2").text("Your Organisations"))
            .child(orgs)
            .into(),
        el("section")
            .class("vol-dashboard__section")
            .child(el("h2").text("Opportunities"))
            .child(opportunities)
            .into(),
        el("section")
            .class("vol-dashboard__section")
            .child(el("h2").text("Applications"))
            .child(applications)
            .into(),
    ])
}

fn application_row(row: &ApplicationRow, opp_title: &str) -> Element {
    let app = &row.application;
    let shift = row.shift.as_ref().map(|shift| {
        Markup::from(
            el("small")
                .class("vol-dashboard__shift")
                .text(format!("{} {}", shift.start_time.format("%b %d"), shift_time(shift))),
        )
    });
    let message = app
        .message
        .as_deref()
        .filter(|m| !m.trim().is_empty())
        .unwrap_or("-");
    let action: Markup = if app.status == ApplicationStatus::Pending {
        el("div")
            .class("vol-dashboard__actions")
            .child(
                el("button")
                    .attr("type", "button")
                    .class("nexus-btn nexus-btn--primary nexus-btn--sm")
                    .attr("data-application", app.id)
                    .attr("data-status", "approved")
                    .text("Approve"),
            )
            .child(
                el("button")
                    .attr("type", "button")
                    .class("nexus-btn nexus-btn--outline nexus-btn--sm")
                    .attr("data-application", app.id)
                    .attr("data-status", "declined")
                    .text("Decline"),
            )
            .into()
    } else {
        Markup::text("-")
    };

    el("tr")
        .child(
            el("td")
                .child(el("strong").text(row.user_name.as_str()))
                .child(el("br"))
                .child(el("small").text(row.user_email.as_str())),
        )
        .child(el("td").text(opp_title).child(shift.map(|s| {
            Markup::Fragment(vec![el("br").into(), s])
        })))
        .child(el("td").child(status_badge(app.status)))
        .child(el("td").text(message))
        .child(el("td").text(app.created_at.format("%b %d, %Y").to_string()))
        .child(el("td").child(action))
}

// =============================================================================
// Certificate
// =============================================================================

async fn certificate(
    ctx: RequestContext,
    State(state): State<AppState>,
) -> Result<Html<String>, AppError> {
    require_feature(&ctx)?;
    let user_id = ctx.user_id().ok_or(AppError::Unauthorized)?;
    let user = state
        .volunteering
        .user(user_id)
        .await?
        .ok_or(AppError::Unauthorized)?;
    let hours = state.volunteering.approved_hours(user_id).await?;
    let today = Utc::now().date_naive();

    Ok(PageShell::new("Volunteer Certificate")
        .body_class("nexus-certificate")
        .style(CERTIFICATE_CSS)
        .script(PRINT_SCRIPT)
        .into_html(certificate_body(&user.display_name(), &hours, today)))
}

/// The printable certificate for a volunteer's approved hours.
pub fn certificate_body(name: &str, hours: &[OrgHours], issued: NaiveDate) -> Markup {
    let total: f64 = hours.iter().map(|h| h.hours).sum();

    let breakdown = (!hours.is_empty()).then(|| {
        Markup::from(
            el("table").class("certificate__breakdown").child(
                el("tbody").children(hours.iter().map(|h| {
                    el("tr")
                        .child(el("td").text(h.org_name.as_str()))
                        .child(el("td").text(format!("{} hours", format_number(h.hours))))
                })),
            ),
        )
    });

    Markup::Fragment(vec![
        el("div")
            .class("certificate__actions")
            .child(button(&ButtonProps {
                id: "printCertificate".into(),
                icon: "print".into(),
                ..ButtonProps::labelled("Print Certificate")
            }))
            .into(),
        el("div")
            .class("certificate")
            .child(el("h1").class("certificate__title").text("Certificate of Volunteering"))
            .child(el("p").class("certificate__subtitle").text("Project NEXUS"))
            .child(el("p").text("This certificate is proudly presented to"))
            .child(el("h2").class("certificate__name").text(name))
            .child(el("p").class("certificate__body").text(format!(
                "This is to certify that {name} has generously contributed {} hours of \
                 volunteer service to the community.",
                format_number(total)
            )))
            .child(breakdown)
            .child(
                el("div")
                    .class("certificate__footer")
                    .child(el("span").text(format!("Issued {}", issued.format("%B %-d, %Y"))))
                    .child(el("span").text("Project NEXUS")),
            )
            .into(),
    ])
}

// =============================================================================
// Calendar export
// =============================================================================

async fn calendar_export(
    ctx: RequestContext,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    require_feature(&ctx)?;
    let user_id = ctx.user_id().ok_or(AppError::Unauthorized)?;
    let invalid = || AppError::BadRequest("Invalid Booking".into());
    let id: i64 = id.parse().ok().ok_or_else(invalid)?;

    let booking = state
        .volunteering
        .booking(ctx.tenant_id, id, user_id)
        .await?
        .filter(|b| b.application.status == ApplicationStatus::Approved)
        .ok_or_else(invalid)?;
    let shift = booking.shift.as_ref().ok_or_else(invalid)?;

    let summary = format!("Volunteer: {}", booking.opp_title);
    let description = format!("Volunteering with {}", booking.org_name);
    let body = ics::calendar(
        &CalendarEvent {
            uid: format!("volunteer-application-{}@nexus", booking.application.id),
            summary: &summary,
            description: &description,
            location: booking.location.as_deref().unwrap_or_default(),
            start: shift.start_time,
            end: shift.end_time,
        },
        Utc::now(),
    );

    Ok((
        [
            (header::CONTENT_TYPE, "text/calendar; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"volunteer-shift.ics\"",
            ),
        ],
        body,
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::security::CurrentUser;
    use crate::volunteering::{Application, InMemoryVolunteering, VolunteeringSource};

    fn ctx(signed_in: bool) -> RequestContext {
        RequestContext {
            user: signed_in.then(|| CurrentUser {
                id: 1,
                name: Some("Jane".into()),
            }),
            tenant_id: 1,
            base_path: "/hub".into(),
            features: vec!["Volunteering".into()],
        }
    }

    async fn garden() -> (OpportunityListing, Vec<Shift>) {
        let store = InMemoryVolunteering::demo(1);
        let listing = store.find(1, 1).await.unwrap().unwrap();
        let shifts = store.shifts(1).await.unwrap();
        (listing, shifts)
    }

    #[test]
    fn feature_check_is_case_insensitive() {
        assert!(require_feature(&ctx(false)).is_ok());
        let mut off = ctx(false);
        off.features.clear();
        assert!(matches!(
            require_feature(&off),
            Err(AppError::FeatureDisabled(_))
        ));
    }

    #[test]
    fn only_http_websites_are_linked() {
        assert_eq!(
            website_href(Some("https://greenstreets.example")).as_deref(),
            Some("https://greenstreets.example/")
        );
        assert_eq!(website_href(Some("javascript:alert(1)")), None);
        assert_eq!(website_href(Some("not a url")), None);
        assert_eq!(website_href(None), None);
    }

    #[tokio::test]
    async fn listing_links_are_tenant_relative() {
        let store = InMemoryVolunteering::demo(1);
        let listings = store.search(1, "").await.unwrap();
        let html = listing_body(&ctx(false), "", &listings).to_string();
        assert!(html.contains("href=\"/hub/volunteering/1\""));
        assert!(html.contains("Online tutoring"));
        assert!(!html.contains("Food parcel packing"));
    }

    #[test]
    fn empty_search_offers_to_clear() {
        let html = listing_body(&ctx(false), "zzz", &[]).to_string();
        assert!(html.contains("No opportunities found"));
        assert!(html.contains("Clear search"));
        assert!(html.contains("0 opportunities"));
    }

    #[tokio::test]
    async fn detail_shows_apply_form_with_shifts() {
        let (listing, shifts) = garden().await;
        let html = detail_body(&ctx(true), &listing, &shifts, ApplyState::CanApply).to_string();
        assert!(html.contains("action=\"/hub/volunteering/apply\""));
        assert!(html.contains("name=\"shift_id\""));
        assert!(html.contains("Tell them why you&#039;d like to volunteer..."));
        assert!(html.contains("Skills Needed"));
    }

    #[tokio::test]
    async fn detail_apply_states() {
        let (listing, shifts) = garden().await;
        let applied = detail_body(&ctx(true), &listing, &shifts, ApplyState::AlreadyApplied);
        assert!(applied.to_string().contains("Already Applied"));

        let sent = detail_body(&ctx(true), &listing, &shifts, ApplyState::JustApplied);
        assert!(sent.to_string().contains("Application Sent!"));

        let anonymous = detail_body(&ctx(false), &listing, &[], ApplyState::SignedOut);
        let html = anonymous.to_string();
        assert!(html.contains("Login to Apply"));
        assert!(!html.contains("<table"));
    }

    #[tokio::test]
    async fn date_ranges() {
        let (listing, _) = garden().await;
        let mut opp = listing.opportunity;
        opp.start_date = NaiveDate::from_ymd_opt(2026, 5, 1);
        opp.end_date = None;
        assert_eq!(date_range(&opp), "May 01, 2026 (Ongoing)");
        opp.start_date = None;
        assert_eq!(date_range(&opp), "Flexible");
    }

    #[test]
    fn certificate_totals_and_breakdown() {
        let hours = vec![
            OrgHours {
                org_name: "Green Streets".into(),
                hours: 12.5,
            },
            OrgHours {
                org_name: "Riverside Food Bank".into(),
                hours: 6.0,
            },
        ];
        let issued = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        let html = certificate_body("Jane Smith", &hours, issued).to_string();
        assert!(html.contains(
            "This is to certify that Jane Smith has generously contributed 18.5 hours of volunteer service"
        ));
        assert!(html.contains("<td>Riverside Food Bank</td><td>6 hours</td>"));
        assert!(html.contains("Issued March 7, 2026"));
    }

    #[test]
    fn certificate_whole_hours_have_no_decimals() {
        let hours = vec![OrgHours {
            org_name: "Green Streets".into(),
            hours: 4.0,
        }];
        let issued = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let html = certificate_body("Sam", &hours, issued).to_string();
        assert!(html.contains("contributed 4 hours"));
    }

    #[tokio::test]
    async fn dashboard_flags_pending_organisations() {
        let store = InMemoryVolunteering::demo(1);
        let data = {
            let organizations = store.organizations_by_owner(1, 2).await.unwrap();
            let mut opportunities = Vec::new();
            let mut applications = Vec::new();
            for org in &organizations {
                for opp in store.opportunities_for_org(org.id).await.unwrap() {
                    for row in store.applications_for_opportunity(opp.id).await.unwrap() {
                        applications.push((row, opp.title.clone()));
                    }
                    opportunities.push((opp, org.name.clone()));
                }
            }
            DashboardData {
                organizations,
                opportunities,
                applications,
            }
        };

        let html = dashboard_body(&ctx(true), "Green Streets", &data).to_string();
        assert!(html.contains("Your organization is under review."));
        assert!(html.contains("vol-status--approved"));
        assert!(html.contains("vol-status--pending"));
        assert!(html.contains("Food parcel packing"));
    }

    #[test]
    fn dashboard_without_organisations() {
        let html = dashboard_body(&ctx(true), "Jane Smith", &DashboardData::default()).to_string();
        assert!(html.contains("No organisation yet"));
        assert!(!html.contains("<table"));
    }

    #[test]
    fn application_row_defaults_message() {
        let row = ApplicationRow {
            application: Application {
                id: 9,
                opportunity_id: 1,
                user_id: 1,
                shift_id: None,
                status: ApplicationStatus::Declined,
                message: Some("  ".into()),
                created_at: NaiveDate::from_ymd_opt(2026, 4, 1)
                    .and_then(|d| d.and_hms_opt(8, 0, 0))
                    .unwrap(),
            },
            user_name: "Jane Smith".into(),
            user_email: "jane@example.org".into(),
            shift: None,
        };
        let html = Markup::from(application_row(&row, "Garden")).to_string();
        assert!(html.contains("<td>-</td>"));
        assert!(html.contains("vol-status--declined"));
        assert!(!html.contains("Approve"));
    }
}
