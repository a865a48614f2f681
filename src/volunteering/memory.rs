use std::collections::BTreeMap;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};

use super::{
    Application, ApplicationRow, ApplicationStatus, Booking, Opportunity, OpportunityListing,
    OrgHours, OrgStatus, Organization, Shift, User, VolunteeringSource,
};

/// Approved hours logged by a volunteer against an organisation.
#[derive(Debug, Clone)]
pub struct HoursLog {
    pub user_id: i64,
    pub organization_id: i64,
    pub hours: f64,
    pub status: ApplicationStatus,
}

/// Volunteering data held in memory.
///
/// Built once with the `with_*` methods and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct InMemoryVolunteering {
    organizations: Vec<Organization>,
    opportunities: Vec<Opportunity>,
    shifts: Vec<Shift>,
    applications: Vec<Application>,
    users: Vec<User>,
    hours: Vec<HoursLog>,
}

impl InMemoryVolunteering {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_organization(mut self, organization: Organization) -> Self {
        self.organizations.push(organization);
        self
    }

    #[must_use]
    pub fn with_opportunity(mut self, opportunity: Opportunity) -> Self {
        self.opportunities.push(opportunity);
        self
    }

    #[must_use]
    pub fn with_shift(mut self, shift: Shift) -> Self {
        self.shifts.push(shift);
        self
    }

    #[must_use]
    pub fn with_application(mut self, application: Application) -> Self {
        self.applications.push(application);
        self
    }

    #[must_use]
    pub fn with_user(mut self, user: User) -> Self {
        self.users.push(user);
        self
    }

    #[must_use]
    pub fn with_hours(mut self, log: HoursLog) -> Self {
        self.hours.push(log);
        self
    }

    fn organization(&self, id: i64) -> Option<&Organization> {
        self.organizations.iter().find(|o| o.id == id)
    }

    fn listing(&self, opportunity: &Opportunity) -> Option<OpportunityListing> {
        let org = self.organization(opportunity.organization_id)?;
        Some(OpportunityListing {
            opportunity: opportunity.clone(),
            org_name: org.name.clone(),
            org_website: org.website.clone(),
            org_owner_id: org.owner_id,
        })
    }

    fn in_tenant(&self, opportunity: &Opportunity, tenant_id: i64) -> bool {
        self.organization(opportunity.organization_id)
            .is_some_and(|org| org.tenant_id == tenant_id)
    }

    fn shift(&self, id: Option<i64>) -> Option<Shift> {
        let id = id?;
        self.shifts.iter().find(|s| s.id == id).cloned()
    }

    /// A small community: two organisations, three opportunities, a volunteer
    /// with an approved booking and logged hours.
    #[must_use]
    pub fn demo(tenant_id: i64) -> Self {
        let at = |date: (i32, u32, u32), hour: u32| -> NaiveDateTime {
            NaiveDate::from_ymd_opt(date.0, date.1, date.2)
                .and_then(|d| d.and_hms_opt(hour, 0, 0))
                .unwrap_or_default()
        };

        Self::new()
            .with_user(User {
                id: 1,
                first_name: "Jane".into(),
                last_name: "Smith".into(),
                email: "jane@example.org".into(),
                profile_type: "individual".into(),
            })
            .with_user(User {
                id: 2,
                first_name: "Green".into(),
                last_name: "Streets".into(),
                email: "hello@greenstreets.example.org".into(),
                profile_type: "organisation".into(),
            })
            .with_organization(Organization {
                id: 1,
                tenant_id,
                owner_id: 2,
                name: "Green Streets".into(),
                website: Some("https://greenstreets.example.org".into()),
                status: OrgStatus::Approved,
            })
            .with_organization(Organization {
                id: 2,
                tenant_id,
                owner_id: 2,
                name: "Riverside Food Bank".into(),
                website: None,
                status: OrgStatus::Pending,
            })
            .with_opportunity(Opportunity {
                id: 1,
                organization_id: 1,
                title: "Community garden helper".into(),
                description: "Help plant, water and maintain the shared vegetable beds.\nNo experience needed.".into(),
                location: Some("Riverside Park".into()),
                skills_needed: vec!["Gardening".into(), "Teamwork".into()],
                start_date: NaiveDate::from_ymd_opt(2026, 5, 1),
                end_date: None,
                hours_needed: Some(4.0),
                created_at: at((2026, 4, 2), 9),
            })
            .with_opportunity(Opportunity {
                id: 2,
                organization_id: 1,
                title: "Online tutoring".into(),
                description: "Support secondary school students with maths homework.".into(),
                location: None,
                skills_needed: vec!["Maths".into()],
                start_date: None,
                end_date: None,
                hours_needed: Some(2.0),
                created_at: at((2026, 4, 10), 14),
            })
            .with_opportunity(Opportunity {
                id: 3,
                organization_id: 2,
                title: "Food parcel packing".into(),
                description: "Pack weekly parcels for local families.".into(),
                location: Some("Dock Street Hall".into()),
                skills_needed: Vec::new(),
                start_date: None,
                end_date: None,
                hours_needed: None,
                created_at: at((2026, 4, 12), 10),
            })
            .with_shift(Shift {
                id: 1,
                opportunity_id: 1,
                start_time: at((2026, 5, 9), 9),
                end_time: at((2026, 5, 9), 12),
                capacity: 8,
            })
            .with_shift(Shift {
                id: 2,
                opportunity_id: 1,
                start_time: at((2026, 5, 16), 13),
                end_time: at((2026, 5, 16), 16),
                capacity: 6,
            })
            .with_application(Application {
                id: 1,
                opportunity_id: 1,
                user_id: 1,
                shift_id: Some(1),
                status: ApplicationStatus::Approved,
                message: Some("Happy to help with the beds.".into()),
                created_at: at((2026, 4, 20), 18),
            })
            .with_application(Application {
                id: 2,
                opportunity_id: 2,
                user_id: 1,
                shift_id: None,
                status: ApplicationStatus::Pending,
                message: None,
                created_at: at((2026, 4, 21), 8),
            })
            .with_hours(HoursLog {
                user_id: 1,
                organization_id: 1,
                hours: 12.5,
                status: ApplicationStatus::Approved,
            })
            .with_hours(HoursLog {
                user_id: 1,
                organization_id: 2,
                hours: 6.0,
                status: ApplicationStatus::Approved,
            })
            .with_hours(HoursLog {
                user_id: 1,
                organization_id: 2,
                hours: 3.0,
                status: ApplicationStatus::Pending,
            })
    }
}

fn matches_query(listing: &OpportunityListing, needle: &str) -> bool {
    let opp = &listing.opportunity;
    [
        Some(opp.title.as_str()),
        Some(opp.description.as_str()),
        opp.location.as_deref(),
        Some(listing.org_name.as_str()),
    ]
    .into_iter()
    .flatten()
    .any(|field| field.to_lowercase().contains(needle))
}

#[async_trait]
impl VolunteeringSource for InMemoryVolunteering {
    async fn search(&self, tenant_id: i64, query: &str) -> Result<Vec<OpportunityListing>> {
        let needle = query.trim().to_lowercase();
        let mut results: Vec<_> = self
            .opportunities
            .iter()
            .filter(|opp| {
                self.organization(opp.organization_id).is_some_and(|org| {
                    org.tenant_id == tenant_id && org.status == OrgStatus::Approved
                })
            })
            .filter_map(|opp| self.listing(opp))
            .filter(|listing| needle.is_empty() || matches_query(listing, &needle))
            .collect();
        results.sort_by(|a, b| b.opportunity.created_at.cmp(&a.opportunity.created_at));
        Ok(results)
    }

    async fn find(&self, tenant_id: i64, id: i64) -> Result<Option<OpportunityListing>> {
        Ok(self
            .opportunities
            .iter()
            .find(|o| o.id == id && self.in_tenant(o, tenant_id))
            .and_then(|o| self.listing(o)))
    }

    async fn shifts(&self, opportunity_id: i64) -> Result<Vec<Shift>> {
        let mut shifts: Vec<_> = self
            .shifts
            .iter()
            .filter(|s| s.opportunity_id == opportunity_id)
            .cloned()
            .collect();
        shifts.sort_by_key(|s| s.start_time);
        Ok(shifts)
    }

    async fn has_applied(&self, opportunity_id: i64, user_id: i64) -> Result<bool> {
        Ok(self
            .applications
            .iter()
            .any(|a| a.opportunity_id == opportunity_id && a.user_id == user_id))
    }

    async fn organizations_by_owner(
        &self,
        tenant_id: i64,
        owner_id: i64,
    ) -> Result<Vec<Organization>> {
        Ok(self
            .organizations
            .iter()
            .filter(|o| o.tenant_id == tenant_id && o.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn opportunities_for_org(&self, organization_id: i64) -> Result<Vec<Opportunity>> {
        Ok(self
            .opportunities
            .iter()
            .filter(|o| o.organization_id == organization_id)
            .cloned()
            .collect())
    }

    async fn applications_for_opportunity(
        &self,
        opportunity_id: i64,
    ) -> Result<Vec<ApplicationRow>> {
        Ok(self
            .applications
            .iter()
            .filter(|a| a.opportunity_id == opportunity_id)
            .map(|a| {
                let user = self.users.iter().find(|u| u.id == a.user_id);
                ApplicationRow {
                    application: a.clone(),
                    user_name: user.map(User::display_name).unwrap_or_default(),
                    user_email: user.map(|u| u.email.clone()).unwrap_or_default(),
                    shift: self.shift(a.shift_id),
                }
            })
            .collect())
    }

    async fn booking(
        &self,
        tenant_id: i64,
        application_id: i64,
        user_id: i64,
    ) -> Result<Option<Booking>> {
        let Some(application) = self
            .applications
            .iter()
            .find(|a| a.id == application_id && a.user_id == user_id)
        else {
            return Ok(None);
        };
        let Some(listing) = self
            .opportunities
            .iter()
            .find(|o| o.id == application.opportunity_id && self.in_tenant(o, tenant_id))
            .and_then(|o| self.listing(o))
        else {
            return Ok(None);
        };

        Ok(Some(Booking {
            application: application.clone(),
            opp_title: listing.opportunity.title,
            org_name: listing.org_name,
            location: listing.opportunity.location,
            shift: self.shift(application.shift_id),
        }))
    }

    async fn user(&self, id: i64) -> Result<Option<User>> {
        Ok(self.users.iter().find(|u| u.id == id).cloned())
    }

    async fn approved_hours(&self, user_id: i64) -> Result<Vec<OrgHours>> {
        let mut by_org: BTreeMap<String, f64> = BTreeMap::new();
        for log in self
            .hours
            .iter()
            .filter(|l| l.user_id == user_id && l.status == ApplicationStatus::Approved)
        {
            let name = self
                .organization(log.organization_id)
                .map_or_else(|| "Unknown organisation".to_string(), |o| o.name.clone());
            *by_org.entry(name).or_default() += log.hours;
        }
        Ok(by_org
            .into_iter()
            .map(|(org_name, hours)| OrgHours { org_name, hours })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> InMemoryVolunteering {
        InMemoryVolunteering::demo(1)
    }

    #[tokio::test]
    async fn search_hides_pending_organisations() {
        let all = store().search(1, "").await.unwrap();
        let titles: Vec<_> = all.iter().map(|l| l.opportunity.title.as_str()).collect();
        assert_eq!(titles, ["Online tutoring", "Community garden helper"]);
    }

    #[tokio::test]
    async fn search_is_case_insensitive_across_fields() {
        let store = store();
        assert_eq!(store.search(1, "RIVERSIDE").await.unwrap().len(), 1);
        assert_eq!(store.search(1, "green streets").await.unwrap().len(), 2);
        assert!(store.search(1, "astronaut").await.unwrap().is_empty());
        assert!(store.search(99, "").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn booking_is_scoped_to_its_owner() {
        let store = store();
        let booking = store.booking(1, 1, 1).await.unwrap().unwrap();
        assert_eq!(booking.org_name, "Green Streets");
        assert!(booking.shift.is_some());
        assert!(store.booking(1, 1, 2).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn lookups_stay_inside_their_tenant() {
        let store = store();
        assert!(store.find(1, 1).await.unwrap().is_some());
        assert!(store.find(2, 1).await.unwrap().is_none());
        assert!(store.booking(2, 1, 1).await.unwrap().is_none());
        assert_eq!(store.organizations_by_owner(1, 2).await.unwrap().len(), 2);
        assert!(store.organizations_by_owner(2, 2).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn approved_hours_group_by_organisation() {
        let hours = store().approved_hours(1).await.unwrap();
        assert_eq!(
            hours,
            vec![
                OrgHours {
                    org_name: "Green Streets".into(),
                    hours: 12.5
                },
                OrgHours {
                    org_name: "Riverside Food Bank".into(),
                    hours: 6.0
                },
            ]
        );
    }

    #[tokio::test]
    async fn applications_join_user_and_shift() {
        let rows = store().applications_for_opportunity(1).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].user_name, "Jane Smith");
        assert_eq!(rows[0].shift.as_ref().map(|s| s.capacity), Some(8));
    }
}
