//! Resource zone resolution
//!
//! A server profile template without a storage controller is a single
//! compute-only zone named after the template. A template with a storage
//! controller is zoned per physical enclosure that holds drive enclosures,
//! found through this chain of lookups:
//!
//! ```text
//! template.enclosureGroupUri
//!   -> index association (category logical-enclosures, exact parentUri match)
//!   -> logical enclosure
//!   -> enclosureUris
//!   -> drive enclosures filtered by locationUri
//! ```
//!
//! When the chain yields no drive-bearing enclosure the template falls back
//! to a single compute-only zone. Lookups run sequentially and the first
//! failure aborts resolution.

use std::collections::HashMap;

use crate::backend::{
    resources::resource_id, BackendResult, Enclosure, OneViewClient, ServerProfileTemplate,
    LOGICAL_ENCLOSURES_CATEGORY,
};

/// Zone ids for every server profile template, in template order
pub async fn resolve_zone_ids(oneview: &OneViewClient) -> BackendResult<Vec<String>> {
    let templates = oneview.server_profile_templates().await?;

    let enclosure_names = if templates.iter().any(|t| t.has_storage_controller()) {
        names_by_uri(oneview.enclosures().await?)
    } else {
        HashMap::new()
    };

    let mut zone_ids = Vec::new();
    for template in &templates {
        if !template.has_storage_controller() {
            tracing::debug!(template = %template.name, "Compute-only zone");
            zone_ids.push(template.id().to_string());
            continue;
        }

        let enclosures = drive_bearing_enclosures(oneview, template).await?;
        if enclosures.is_empty() {
            tracing::debug!(template = %template.name, "No drive enclosures reachable, compute-only zone");
            zone_ids.push(template.id().to_string());
            continue;
        }

        for enclosure_uri in enclosures {
            tracing::debug!(
                template = %template.name,
                enclosure = enclosure_names.get(&enclosure_uri).map(String::as_str).unwrap_or(""),
                "Storage zone"
            );
            zone_ids.push(format!("{}-{}", template.id(), resource_id(&enclosure_uri)));
        }
    }

    Ok(zone_ids)
}

/// Physical enclosures of the template's logical enclosure that hold at
/// least one drive enclosure, in logical enclosure order
async fn drive_bearing_enclosures(
    oneview: &OneViewClient,
    template: &ServerProfileTemplate,
) -> BackendResult<Vec<String>> {
    let Some(group_uri) = template.enclosure_group_uri.as_deref() else {
        return Ok(Vec::new());
    };

    let associations = oneview
        .associations(group_uri, LOGICAL_ENCLOSURES_CATEGORY)
        .await?;
    let Some(association) = associations.iter().find(|a| a.parent_uri == group_uri) else {
        tracing::debug!(enclosure_group = %group_uri, "No logical enclosure associated");
        return Ok(Vec::new());
    };

    let logical_enclosure = oneview.logical_enclosure(&association.child_uri).await?;

    let mut bearing = Vec::new();
    for enclosure_uri in logical_enclosure.enclosure_uris {
        // The appliance filter is not trusted to have been applied
        let drives = oneview.drive_enclosures_at(&enclosure_uri).await?;
        if drives.iter().any(|d| d.is_located_at(&enclosure_uri)) {
            bearing.push(enclosure_uri);
        }
    }
    Ok(bearing)
}

fn names_by_uri(enclosures: Vec<Enclosure>) -> HashMap<String, String> {
    enclosures.into_iter().map(|e| (e.uri, e.name)).collect()
}
