use serde::Deserialize;

/// One page of a JSON:API collection response.
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub links: Option<Links>,
}

impl<T> Page<T> {
    /// The follow-up link, if the API returned one. An empty link ends the
    /// collection.
    pub fn next_link(&self) -> Option<&str> {
        self.links
            .as_ref()
            .and_then(|links| links.next.as_deref())
            .filter(|link| !link.is_empty())
    }
}

/// Pagination links. Only `next` drives the fetch loop.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Links {
    pub next: Option<String>,
}

/// An organization listed under a group.
#[derive(Debug, Clone, Deserialize)]
pub struct Organization {
    pub id: String,
    pub attributes: OrganizationAttributes,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrganizationAttributes {
    pub name: String,
    pub slug: String,
}

impl Organization {
    pub fn name(&self) -> &str {
        &self.attributes.name
    }

    pub fn slug(&self) -> &str {
        &self.attributes.slug
    }
}

/// A scanned project within an organization.
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub id: String,
    pub attributes: ProjectAttributes,
    pub relationships: ProjectRelationships,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectAttributes {
    pub name: String,
    #[serde(rename = "type")]
    pub project_type: String,
    /// Creation timestamp, kept exactly as the API formats it.
    pub created: String,
    pub status: String,
    pub origin: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectRelationships {
    pub organization: Relationship,
}

/// A to-one JSON:API relationship.
#[derive(Debug, Clone, Deserialize)]
pub struct Relationship {
    pub data: ResourceIdentifier,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResourceIdentifier {
    pub id: String,
}

impl Project {
    /// Identifier of the organization that owns this project.
    pub fn org_id(&self) -> &str {
        &self.relationships.organization.data.id
    }
}
