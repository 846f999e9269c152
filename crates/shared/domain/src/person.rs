//! Person entity: the human behind a user, scoped to one tenant.

use serde::Serialize;

use crate::contact_information::ContactInformation;
use crate::email_address::EmailAddress;
use crate::full_name::FullName;
use crate::tenant_id::TenantId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    tenant_id: TenantId,
    name: FullName,
    contact_information: ContactInformation,
}

impl Person {
    pub fn new(tenant_id: TenantId, name: FullName, contact_information: ContactInformation) -> Self {
        Self {
            tenant_id,
            name,
            contact_information,
        }
    }

    pub fn change_contact_information(&mut self, contact_information: ContactInformation) {
        self.contact_information = contact_information;
    }

    pub fn change_name(&mut self, name: FullName) {
        self.name = name;
    }

    pub fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }

    pub fn name(&self) -> &FullName {
        &self.name
    }

    pub fn contact_information(&self) -> &ContactInformation {
        &self.contact_information
    }

    pub fn email_address(&self) -> &EmailAddress {
        self.contact_information.email_address()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::postal_address::PostalAddress;
    use crate::telephone::Telephone;

    fn contact_information() -> ContactInformation {
        ContactInformation::new(
            EmailAddress::new("sample@mail.com").unwrap(),
            PostalAddress::new("streetAddress", "city", "stateProvince", "postalCode", "00")
                .unwrap(),
            Telephone::new("090-1234-5678").unwrap(),
            Telephone::new("090-5678-1234").unwrap(),
        )
    }

    fn full_name() -> FullName {
        FullName::new("FirstName", "lastName").unwrap()
    }

    #[test]
    fn test_new_person() {
        let tenant_id = TenantId::generate();
        let person = Person::new(tenant_id.clone(), full_name(), contact_information());

        assert_eq!(person.tenant_id(), &tenant_id);
        assert_eq!(person.name(), &full_name());
        assert_eq!(person.contact_information(), &contact_information());
    }

    #[test]
    fn test_change_contact_information() {
        let tenant_id = TenantId::generate();
        let original = contact_information();
        let mut person = Person::new(tenant_id.clone(), full_name(), original.clone());

        let changed = original.change_email_address(EmailAddress::new("changed@email.com").unwrap());
        person.change_contact_information(changed.clone());

        let want = Person::new(tenant_id, full_name(), changed);
        assert_eq!(person, want);
        assert_eq!(person.email_address().address(), "changed@email.com");
        assert_eq!(original.email_address().address(), "sample@mail.com");
    }

    #[test]
    fn test_change_name() {
        let tenant_id = TenantId::generate();
        let mut person = Person::new(tenant_id.clone(), full_name(), contact_information());

        let changed = full_name().with_changed_first_name("ChangedFirstName").unwrap();
        person.change_name(changed.clone());

        assert_eq!(person, Person::new(tenant_id, changed, contact_information()));
        assert_eq!(person.name().as_formatted_name(), "ChangedFirstName lastName");
    }

    #[test]
    fn test_email_address() {
        let person = Person::new(TenantId::generate(), full_name(), contact_information());
        assert_eq!(person.email_address(), contact_information().email_address());
    }
}
