//! Volunteering domain records and their data source.
//!
//! Page handlers never query storage directly; they ask a
//! [`VolunteeringSource`] for plain records. [`InMemoryVolunteering`] backs the
//! binary's demo tenant and the tests.

mod memory;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

pub use memory::{HoursLog, InMemoryVolunteering};

/// Review state of an organisation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrgStatus {
    Pending,
    #[default]
    Approved,
}

#[derive(Debug, Clone, Serialize)]
pub struct Organization {
    pub id: i64,
    pub tenant_id: i64,
    pub owner_id: i64,
    pub name: String,
    pub website: Option<String>,
    pub status: OrgStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct Opportunity {
    pub id: i64,
    pub organization_id: i64,
    pub title: String,
    pub description: String,
    /// `None` for remote opportunities.
    pub location: Option<String>,
    pub skills_needed: Vec<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub hours_needed: Option<f64>,
    pub created_at: NaiveDateTime,
}

/// An opportunity joined with its organisation.
#[derive(Debug, Clone, Serialize)]
pub struct OpportunityListing {
    #[serde(flatten)]
    pub opportunity: Opportunity,
    pub org_name: String,
    pub org_website: Option<String>,
    pub org_owner_id: i64,
}

/// A bookable time slot on an opportunity.
#[derive(Debug, Clone, Serialize)]
pub struct Shift {
    pub id: i64,
    pub opportunity_id: i64,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub capacity: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Approved,
    Declined,
}

impl ApplicationStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Declined => "declined",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Application {
    pub id: i64,
    pub opportunity_id: i64,
    pub user_id: i64,
    pub shift_id: Option<i64>,
    pub status: ApplicationStatus,
    pub message: Option<String>,
    pub created_at: NaiveDateTime,
}

/// An application joined with its applicant and shift, as listed to the organiser.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationRow {
    #[serde(flatten)]
    pub application: Application,
    pub user_name: String,
    pub user_email: String,
    pub shift: Option<Shift>,
}

/// An application joined with everything a calendar entry needs.
#[derive(Debug, Clone, Serialize)]
pub struct Booking {
    pub application: Application,
    pub opp_title: String,
    pub org_name: String,
    pub location: Option<String>,
    pub shift: Option<Shift>,
}

#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// `individual` or `organisation`.
    pub profile_type: String,
}

impl User {
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Approved volunteer hours credited by one organisation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrgHours {
    pub org_name: String,
    pub hours: f64,
}

/// Read access to volunteering data.
#[async_trait]
pub trait VolunteeringSource: Send + Sync + std::fmt::Debug {
    // =========================================================================
    // Opportunities
    // =========================================================================

    /// Opportunities of approved organisations in a tenant.
    ///
    /// An empty query matches everything; otherwise title, description,
    /// location and organisation name are matched case-insensitively.
    async fn search(&self, tenant_id: i64, query: &str) -> Result<Vec<OpportunityListing>>;

    /// One opportunity, if its organisation belongs to the tenant.
    async fn find(&self, tenant_id: i64, id: i64) -> Result<Option<OpportunityListing>>;

    /// Shifts in start order.
    async fn shifts(&self, opportunity_id: i64) -> Result<Vec<Shift>>;

    async fn has_applied(&self, opportunity_id: i64, user_id: i64) -> Result<bool>;

    // =========================================================================
    // Organisations
    // =========================================================================

    async fn organizations_by_owner(
        &self,
        tenant_id: i64,
        owner_id: i64,
    ) -> Result<Vec<Organization>>;

    async fn opportunities_for_org(&self, organization_id: i64) -> Result<Vec<Opportunity>>;

    async fn applications_for_opportunity(&self, opportunity_id: i64)
    -> Result<Vec<ApplicationRow>>;

    // =========================================================================
    // Volunteers
    // =========================================================================

    /// One of the user's own applications within the tenant.
    async fn booking(
        &self,
        tenant_id: i64,
        application_id: i64,
        user_id: i64,
    ) -> Result<Option<Booking>>;

    async fn user(&self, id: i64) -> Result<Option<User>>;

    /// Approved hours per organisation.
    async fn approved_hours(&self, user_id: i64) -> Result<Vec<OrgHours>>;
}
