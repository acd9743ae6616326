use crate::{
    core::{
        status::{Update, VsStatus},
        CONTROLLER_NAME,
    },
    k8s,
};
use kube::api::{Api, Patch, PatchParams};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, error};

const API_VERSION: &str = "envoy.kaasops.io/v1alpha1";

/// Publishes compiled outcomes onto the VirtualService status subresource.
pub struct Controller {
    client: kube::Client,
    updates: UnboundedReceiver<Update>,
}

// === impl Controller ===

impl Controller {
    pub fn new(client: kube::Client, updates: UnboundedReceiver<Update>) -> Self {
        Self { client, updates }
    }

    /// Applies status patches until the sending half closes.
    ///
    /// Patching is best-effort: a failed patch is logged and dropped, and the
    /// next recompilation of the service emits a fresh update.
    pub async fn process_updates(mut self) {
        let patch_params = PatchParams::apply(CONTROLLER_NAME);

        while let Some(Update { target, status }) = self.updates.recv().await {
            let api = Api::<k8s::xds::VirtualService>::namespaced(
                self.client.clone(),
                &target.namespace,
            );
            let patch = make_patch(&status);
            debug!(%target, valid = status.valid, "Patching status");
            if let Err(error) = api.patch_status(&target.name, &patch_params, &patch).await {
                error!(%target, %error, "Failed to patch VirtualService status");
            }
        }
    }
}

fn make_patch(status: &VsStatus) -> Patch<serde_json::Value> {
    let status = k8s::xds::VirtualServiceStatus {
        valid: status.valid,
        message: status.message.clone(),
        invalid_reasons: status
            .reasons
            .iter()
            .map(|reason| reason.as_str().to_string())
            .collect(),
    };
    Patch::Merge(serde_json::json!({
        "apiVersion": API_VERSION,
        "kind": "VirtualService",
        "status": status,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Reason;

    #[test]
    fn valid_patch_omits_failure_fields() {
        let Patch::Merge(patch) = make_patch(&VsStatus::valid()) else {
            panic!("expected a merge patch");
        };

        assert_eq!(
            patch,
            serde_json::json!({
                "apiVersion": "envoy.kaasops.io/v1alpha1",
                "kind": "VirtualService",
                "status": { "valid": true },
            }),
        );
    }

    #[test]
    fn invalid_patch_carries_message_and_reasons() {
        let status = VsStatus {
            valid: false,
            message: "virtual service and template both define listener".to_string(),
            reasons: vec![Reason::XorViolation],
        };

        let Patch::Merge(patch) = make_patch(&status) else {
            panic!("expected a merge patch");
        };

        assert_eq!(
            patch,
            serde_json::json!({
                "apiVersion": "envoy.kaasops.io/v1alpha1",
                "kind": "VirtualService",
                "status": {
                    "valid": false,
                    "message": "virtual service and template both define listener",
                    "invalidReasons": ["XORViolation"],
                },
            }),
        );
    }
}
