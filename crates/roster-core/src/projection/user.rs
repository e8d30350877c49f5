//! User projection.

use crate::canonical::{
    Address, CanonicalUser, Email, EnterpriseExtension, Manager, Name, PhoneNumber, Tagged, tags,
};
use crate::errors::ProjectionError;
use crate::records::{UserRecord, WorkAddress};

/// First entry carrying `tag`, by input order.
fn first_tagged<'a, T: Tagged>(entries: &'a [T], tag: &str) -> Option<&'a T> {
    entries.iter().find(|entry| entry.has_tag(tag))
}

fn phone_value(phones: &[PhoneNumber], tag: &str) -> Option<String> {
    first_tagged(phones, tag).and_then(|phone| phone.value.clone())
}

/// Expand a user record into the canonical user.
///
/// Emits exactly one `work` email, one `work` address, and the `work`,
/// `mobile`, `fax` phone numbers in that order, whether or not the record
/// fields are set.
#[must_use]
pub fn to_canonical(record: &UserRecord) -> CanonicalUser {
    let address = &record.address;

    CanonicalUser {
        id: record.id.map(|id| id.to_string()),
        user_name: record.user_name.clone(),
        active: record.active,
        display_name: record.display_name.clone(),
        title: record.job_title.clone(),
        emails: vec![Email {
            primary: Some(true),
            ..Email::tagged(tags::WORK, record.mail.clone())
        }],
        preferred_language: record.preferred_language.clone(),
        name: Some(Name {
            given_name: record.given_name.clone(),
            family_name: record.family_name.clone(),
            formatted: record.formatted_name.clone(),
        }),
        addresses: vec![Address {
            item_type: Some(tags::WORK.to_string()),
            formatted: address.formatted.clone(),
            street_address: address.street.clone(),
            locality: address.city.clone(),
            region: address.region.clone(),
            postal_code: address.postal_code.clone(),
            country: address.country.clone(),
            primary: Some(true),
        }],
        phone_numbers: vec![
            PhoneNumber {
                primary: Some(true),
                ..PhoneNumber::tagged(tags::WORK, record.telephone.clone())
            },
            PhoneNumber::tagged(tags::MOBILE, record.mobile.clone()),
            PhoneNumber::tagged(tags::FAX, record.fax.clone()),
        ],
        external_id: record.external_id.clone(),
        enterprise: Some(EnterpriseExtension {
            employee_number: record.employee_id.clone(),
            department: record.department.clone(),
            manager: Some(Manager {
                value: record.manager.clone(),
            }),
        }),
    }
}

/// Flatten a canonical user into a user record.
///
/// # Errors
///
/// Returns `ProjectionError::InvalidIdentifier` if the resource carries an
/// identifier that is not a valid resource id.
pub fn from_canonical(resource: &CanonicalUser) -> Result<UserRecord, ProjectionError> {
    let id = super::parse_optional_id(resource.id.as_deref())?;

    let mail = first_tagged(&resource.emails, tags::WORK).and_then(|email| email.value.clone());

    let address = first_tagged(&resource.addresses, tags::WORK)
        .map(|work| WorkAddress {
            formatted: work.formatted.clone(),
            street: work.street_address.clone(),
            city: work.locality.clone(),
            region: work.region.clone(),
            postal_code: work.postal_code.clone(),
            country: work.country.clone(),
        })
        .unwrap_or_default();

    let name = resource.name.clone().unwrap_or_default();
    let enterprise = resource.enterprise.clone().unwrap_or_default();

    Ok(UserRecord {
        id,
        user_name: resource.user_name.clone(),
        active: resource.active,
        display_name: resource.display_name.clone(),
        job_title: resource.title.clone(),
        mail,
        preferred_language: resource.preferred_language.clone(),
        given_name: name.given_name,
        family_name: name.family_name,
        formatted_name: name.formatted,
        address,
        telephone: phone_value(&resource.phone_numbers, tags::WORK),
        mobile: phone_value(&resource.phone_numbers, tags::MOBILE),
        fax: phone_value(&resource.phone_numbers, tags::FAX),
        external_id: resource.external_id.clone(),
        employee_id: enterprise.employee_number,
        department: enterprise.department,
        manager: enterprise.manager.and_then(|manager| manager.value),
    })
}
