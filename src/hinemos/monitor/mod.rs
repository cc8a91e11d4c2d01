//! Monitor settings: generic listing and toggles plus typed per-kind
//! endpoints, create builders and patch-merging updates.

pub mod builders;
pub mod thresholds;
pub mod update;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use super::client::{validate_id, HinemosClient};
use super::error::HinemosError;
use super::models::*;

pub use builders::{CreateMonitorArgs, PatternRule};
pub use thresholds::ThresholdRule;
pub use update::*;

pub struct MonitorApi<'a> {
    client: &'a HinemosClient,
}

impl<'a> MonitorApi<'a> {
    pub fn new(client: &'a HinemosClient) -> Self {
        Self { client }
    }

    /// All monitors, or those matching `filter` through the search endpoint.
    pub async fn list_monitors(
        &self,
        filter: Option<&GetMonitorListRequest>,
    ) -> Result<Vec<MonitorInfo>, HinemosError> {
        match filter {
            Some(filter) => self.client.post("monitorsetting/monitor_search", filter).await,
            None => self.client.get("monitorsetting/monitor", &[]).await,
        }
    }

    pub async fn get_monitor(&self, monitor_id: &str) -> Result<MonitorInfo, HinemosError> {
        let monitor_id = validate_id("monitor_id", monitor_id)?;
        self.client
            .get(&format!("monitorsetting/monitor/{monitor_id}"), &[])
            .await
    }

    pub async fn delete_monitors(&self, monitor_ids: &[String]) -> Result<(), HinemosError> {
        if monitor_ids.is_empty() {
            return Ok(());
        }

        let request = DeleteMonitorRequest {
            monitor_id_list: checked_ids(monitor_ids)?,
        };
        let _: Value = self
            .client
            .delete_with_body("monitorsetting/monitor", &request)
            .await?;
        info!(count = monitor_ids.len(), "monitors deleted");
        Ok(())
    }

    pub async fn set_monitors_enabled(
        &self,
        monitor_ids: &[String],
        enabled: bool,
    ) -> Result<(), HinemosError> {
        self.toggle("monitorsetting/monitor_monitorValid", monitor_ids, enabled)
            .await
    }

    pub async fn set_collectors_enabled(
        &self,
        monitor_ids: &[String],
        enabled: bool,
    ) -> Result<(), HinemosError> {
        self.toggle("monitorsetting/monitor_collectorValid", monitor_ids, enabled)
            .await
    }

    async fn toggle(
        &self,
        endpoint: &str,
        monitor_ids: &[String],
        enabled: bool,
    ) -> Result<(), HinemosError> {
        if monitor_ids.is_empty() {
            return Ok(());
        }

        let request = MonitorValidRequest {
            monitor_ids: checked_ids(monitor_ids)?,
            valid_flg: enabled,
        };
        let _: Value = self.client.put(endpoint, &request).await?;
        Ok(())
    }

    pub async fn enable_monitors(&self, monitor_ids: &[String]) -> Result<(), HinemosError> {
        self.set_monitors_enabled(monitor_ids, true).await
    }

    pub async fn disable_monitors(&self, monitor_ids: &[String]) -> Result<(), HinemosError> {
        self.set_monitors_enabled(monitor_ids, false).await
    }

    pub async fn enable_collectors(&self, monitor_ids: &[String]) -> Result<(), HinemosError> {
        self.set_collectors_enabled(monitor_ids, true).await
    }

    /// Disables collection, skipping monitors with prediction enabled since
    /// the manager refuses those. Monitors that cannot be read are kept in
    /// the batch. Returns the IDs actually submitted.
    pub async fn disable_collectors(
        &self,
        monitor_ids: &[String],
    ) -> Result<Vec<String>, HinemosError> {
        let mut eligible = Vec::with_capacity(monitor_ids.len());
        for monitor_id in monitor_ids {
            match self.get_monitor(monitor_id).await {
                Ok(monitor) if monitor.prediction_flg == Some(true) => {
                    info!(monitor_id = %monitor_id, "skipping collector disable, prediction enabled");
                }
                Ok(_) => eligible.push(monitor_id.clone()),
                Err(err) => {
                    warn!(monitor_id = %monitor_id, error = %err, "could not inspect monitor");
                    eligible.push(monitor_id.clone());
                }
            }
        }

        self.set_collectors_enabled(&eligible, false).await?;
        Ok(eligible)
    }

    async fn add_kind<Req: Serialize, Resp: DeserializeOwned>(
        &self,
        kind: MonitorKind,
        request: &Req,
    ) -> Result<Resp, HinemosError> {
        self.client
            .post(&format!("monitorsetting/{}", kind.path()), request)
            .await
    }

    async fn modify_kind<Req: Serialize, Resp: DeserializeOwned>(
        &self,
        kind: MonitorKind,
        monitor_id: &str,
        request: &Req,
    ) -> Result<Resp, HinemosError> {
        let monitor_id = validate_id("monitor_id", monitor_id)?;
        self.client
            .put(&format!("monitorsetting/{}/{monitor_id}", kind.path()), request)
            .await
    }

    async fn list_kind<Resp: DeserializeOwned>(
        &self,
        kind: MonitorKind,
    ) -> Result<Vec<Resp>, HinemosError> {
        self.client
            .get(&format!("monitorsetting/{}", kind.path()), &[])
            .await
    }

    /// Validates and submits a new monitor of `kind`. Nothing is sent when a
    /// required parameter is missing.
    pub async fn create(
        &self,
        kind: MonitorKind,
        args: &CreateMonitorArgs,
    ) -> Result<MonitorResponseInfo, HinemosError> {
        match kind {
            MonitorKind::Ping => self.create_ping(args).await.map(|created| created.info),
            MonitorKind::HttpNumeric => self.create_http_numeric(args).await.map(|created| created.info),
            MonitorKind::HttpString => self.create_http_string(args).await.map(|created| created.info),
            MonitorKind::Snmp => self.create_snmp(args).await.map(|created| created.info),
            MonitorKind::Logfile => self.create_logfile(args).await.map(|created| created.info),
            MonitorKind::Sql => self.create_sql(args).await.map(|created| created.info),
            MonitorKind::Jmx => self.create_jmx(args).await.map(|created| created.info),
            MonitorKind::Process => self.create_process(args).await.map(|created| created.info),
            MonitorKind::Port => self.create_port(args).await.map(|created| created.info),
            MonitorKind::WinEvent => self.create_winevent(args).await.map(|created| created.info),
            MonitorKind::Custom => self.create_custom(args).await.map(|created| created.info),
        }
    }
}

fn checked_ids(monitor_ids: &[String]) -> Result<Vec<String>, HinemosError> {
    monitor_ids
        .iter()
        .map(|id| validate_id("monitor_ids", id).map(str::to_string))
        .collect()
}

fn find_monitor<T>(
    monitors: Vec<T>,
    monitor_id: &str,
    id_of: impl Fn(&T) -> &str,
) -> Result<T, HinemosError> {
    monitors
        .into_iter()
        .find(|monitor| id_of(monitor) == monitor_id)
        .ok_or_else(|| HinemosError::not_found("Monitor", monitor_id))
}

/// Typed `add_*`, `modify_*`, `list_*`, `create_*` and `update_*` for each kind.
macro_rules! kind_endpoints {
    ($(
        $kind:ident {
            add: $add:ident($add_req:ty),
            modify: $modify:ident($modify_req:ty),
            list: $list:ident,
            create: $create:ident = $build:path,
            update: $update:ident($patch:ty) = $merge:path,
            response: $resp:ty $(,)?
        }
    )*) => {
        impl MonitorApi<'_> {
            $(
                pub async fn $add(&self, request: &$add_req) -> Result<$resp, HinemosError> {
                    self.add_kind(MonitorKind::$kind, request).await
                }

                pub async fn $modify(
                    &self,
                    monitor_id: &str,
                    request: &$modify_req,
                ) -> Result<$resp, HinemosError> {
                    self.modify_kind(MonitorKind::$kind, monitor_id, request).await
                }

                pub async fn $list(&self) -> Result<Vec<$resp>, HinemosError> {
                    self.list_kind(MonitorKind::$kind).await
                }

                pub async fn $create(&self, args: &CreateMonitorArgs) -> Result<$resp, HinemosError> {
                    let request = $build(args)?;
                    let created = self.$add(&request).await?;
                    info!(
                        monitor_id = %created.info.monitor_id,
                        kind = %MonitorKind::$kind,
                        "monitor created"
                    );
                    Ok(created)
                }

                pub async fn $update(
                    &self,
                    monitor_id: &str,
                    patch: $patch,
                ) -> Result<$resp, HinemosError> {
                    let monitor_id = validate_id("monitor_id", monitor_id)?;
                    let current = find_monitor(self.$list().await?, monitor_id, |monitor| {
                        monitor.info.monitor_id.as_str()
                    })?;
                    let request = $merge(&current, patch)?;
                    self.$modify(monitor_id, &request).await
                }
            )*
        }
    };
}

kind_endpoints! {
    Ping {
        add: add_ping(AddPingMonitorRequest),
        modify: modify_ping(ModifyPingMonitorRequest),
        list: list_ping,
        create: create_ping = builders::build_ping,
        update: update_ping(PingMonitorPatch) = update::merge_ping,
        response: PingMonitorResponse,
    }
    HttpNumeric {
        add: add_http_numeric(AddHttpNumericMonitorRequest),
        modify: modify_http_numeric(ModifyHttpNumericMonitorRequest),
        list: list_http_numeric,
        create: create_http_numeric = builders::build_http_numeric,
        update: update_http_numeric(HttpNumericMonitorPatch) = update::merge_http_numeric,
        response: HttpNumericMonitorResponse,
    }
    HttpString {
        add: add_http_string(AddHttpStringMonitorRequest),
        modify: modify_http_string(ModifyHttpStringMonitorRequest),
        list: list_http_string,
        create: create_http_string = builders::build_http_string,
        update: update_http_string(HttpStringMonitorPatch) = update::merge_http_string,
        response: HttpStringMonitorResponse,
    }
    Snmp {
        add: add_snmp(AddSnmpMonitorRequest),
        modify: modify_snmp(ModifySnmpMonitorRequest),
        list: list_snmp,
        create: create_snmp = builders::build_snmp,
        update: update_snmp(SnmpMonitorPatch) = update::merge_snmp,
        response: SnmpMonitorResponse,
    }
    Logfile {
        add: add_logfile(AddLogfileMonitorRequest),
        modify: modify_logfile(ModifyLogfileMonitorRequest),
        list: list_logfile,
        create: create_logfile = builders::build_logfile,
        update: update_logfile(LogfileMonitorPatch) = update::merge_logfile,
        response: LogfileMonitorResponse,
    }
    Sql {
        add: add_sql(AddSqlMonitorRequest),
        modify: modify_sql(ModifySqlMonitorRequest),
        list: list_sql,
        create: create_sql = builders::build_sql,
        update: update_sql(SqlMonitorPatch) = update::merge_sql,
        response: SqlMonitorResponse,
    }
    Jmx {
        add: add_jmx(AddJmxMonitorRequest),
        modify: modify_jmx(ModifyJmxMonitorRequest),
        list: list_jmx,
        create: create_jmx = builders::build_jmx,
        update: update_jmx(JmxMonitorPatch) = update::merge_jmx,
        response: JmxMonitorResponse,
    }
    Process {
        add: add_process(AddProcessMonitorRequest),
        modify: modify_process(ModifyProcessMonitorRequest),
        list: list_process,
        create: create_process = builders::build_process,
        update: update_process(ProcessMonitorPatch) = update::merge_process,
        response: ProcessMonitorResponse,
    }
    Port {
        add: add_port(AddPortMonitorRequest),
        modify: modify_port(ModifyPortMonitorRequest),
        list: list_port,
        create: create_port = builders::build_port,
        update: update_port(PortMonitorPatch) = update::merge_port,
        response: PortMonitorResponse,
    }
    WinEvent {
        add: add_winevent(AddWinEventMonitorRequest),
        modify: modify_winevent(ModifyWinEventMonitorRequest),
        list: list_winevent,
        create: create_winevent = builders::build_winevent,
        update: update_winevent(WinEventMonitorPatch) = update::merge_winevent,
        response: WinEventMonitorResponse,
    }
    Custom {
        add: add_custom(AddCustomMonitorRequest),
        modify: modify_custom(ModifyCustomMonitorRequest),
        list: list_custom,
        create: create_custom = builders::build_custom,
        update: update_custom(CustomMonitorPatch) = update::merge_custom,
        response: CustomMonitorResponse,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use reqwest::Method;
    use serde_json::json;

    use super::*;
    use crate::hinemos::mock::{client_with, echo, MockTransport};
    use crate::hinemos::transport::HttpResponse;

    #[tokio::test]
    async fn missing_required_parameter_makes_no_call_for_every_kind() {
        for kind in MonitorKind::ALL {
            let transport = Arc::new(MockTransport::new());
            let client = client_with(&transport);
            // ping has no type-specific requirement, so it loses its target instead
            let facility_id = if kind == MonitorKind::Ping { "" } else { "NODE01" };
            let args = CreateMonitorArgs {
                monitor_id: "MON_01".to_string(),
                facility_id: facility_id.to_string(),
                ..Default::default()
            };

            let err = client
                .monitor()
                .create(kind, &args)
                .await
                .expect_err("missing parameter");
            assert!(err.is_validation(), "{kind}: {err}");
            assert!(err.to_string().contains(kind.label()), "{kind}: {err}");
            assert_eq!(transport.total_calls(), 0, "{kind} reached the network");
        }
    }

    #[tokio::test]
    async fn create_then_list_surfaces_new_ping_monitor() {
        let stored: Arc<Mutex<Vec<Value>>> = Arc::new(Mutex::new(Vec::new()));
        let on_add = stored.clone();
        let on_list = stored.clone();
        let transport = Arc::new(
            MockTransport::new()
                .on_fn(Method::POST, "monitorsetting/ping", move |request| {
                    let body = request.body.clone().unwrap_or_default();
                    on_add.lock().expect("store").push(body);
                    echo(request)
                })
                .on_fn(Method::GET, "monitorsetting/ping", move |_| HttpResponse {
                    status: 200,
                    body: Value::Array(on_list.lock().expect("store").clone()).to_string(),
                }),
        );
        let client = client_with(&transport);
        let monitors = client.monitor();

        let created = monitors
            .create_ping(&CreateMonitorArgs {
                monitor_id: "PING_01".to_string(),
                facility_id: "NODE01".to_string(),
                run_count: Some(3),
                timeout: Some(5000),
                ..Default::default()
            })
            .await
            .expect("create");
        assert_eq!(created.info.monitor_id, "PING_01");

        let listed = monitors.list_ping().await.expect("list");
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].info.monitor_id, "PING_01");
        let check = listed[0].ping_check_info.clone().expect("check");
        assert_eq!(check.run_count, Some(3));
        assert_eq!(check.timeout, Some(5000));
        assert_eq!(transport.login_count(), 1);
    }

    #[tokio::test]
    async fn update_http_numeric_preserves_stored_timeout() {
        let transport = Arc::new(
            MockTransport::new()
                .on(
                    Method::GET,
                    "monitorsetting/httpNumeric",
                    200,
                    json!([
                        {"monitorId": "OTHER", "httpCheckInfo": {"requestUrl": "http://other", "timeout": 3000}},
                        {
                            "monitorId": "X",
                            "facilityId": "NODE01",
                            "runInterval": "MIN_05",
                            "httpCheckInfo": {"requestUrl": "http://old", "timeout": 10000}
                        }
                    ]),
                )
                .on_fn(Method::PUT, "monitorsetting/httpNumeric/X", |request| {
                    let mut body = request.body.clone().unwrap_or_default();
                    body["monitorId"] = json!("X");
                    HttpResponse {
                        status: 200,
                        body: body.to_string(),
                    }
                }),
        );
        let client = client_with(&transport);

        client
            .monitor()
            .update_http_numeric(
                "X",
                HttpNumericMonitorPatch {
                    check: HttpCheckPatch {
                        url: Some("http://new".to_string()),
                        timeout: None,
                    },
                    ..Default::default()
                },
            )
            .await
            .expect("update");

        let puts = transport.calls_to(Method::PUT, "monitorsetting/httpNumeric/X");
        assert_eq!(puts.len(), 1);
        let body = puts[0].body.clone().expect("body");
        assert_eq!(body["httpCheckInfo"]["timeout"], json!(10000));
        assert_eq!(body["httpCheckInfo"]["requestUrl"], json!("http://new"));
        assert_eq!(body["facilityId"], json!("NODE01"));
    }

    #[tokio::test]
    async fn update_of_unknown_monitor_is_not_found() {
        let transport = Arc::new(MockTransport::new().on(
            Method::GET,
            "monitorsetting/ping",
            200,
            json!([{"monitorId": "PING_01"}]),
        ));
        let client = client_with(&transport);

        let err = client
            .monitor()
            .update_ping("PING_99", PingMonitorPatch::default())
            .await
            .expect_err("absent");

        assert!(matches!(err, HinemosError::NotFound { .. }));
        assert_eq!(err.to_string(), "Monitor with ID PING_99 not found");
        assert!(transport
            .calls_to(Method::PUT, "monitorsetting/ping/PING_99")
            .is_empty());
    }

    #[tokio::test]
    async fn disable_collectors_skips_prediction_monitors() {
        let transport = Arc::new(
            MockTransport::new()
                .on(
                    Method::GET,
                    "monitorsetting/monitor/A",
                    200,
                    json!({"monitorId": "A", "predictionFlg": false}),
                )
                .on(
                    Method::GET,
                    "monitorsetting/monitor/B",
                    200,
                    json!({"monitorId": "B", "predictionFlg": true}),
                )
                .on(
                    Method::GET,
                    "monitorsetting/monitor/C",
                    200,
                    json!({"monitorId": "C"}),
                )
                .on_fn(Method::PUT, "monitorsetting/monitor_collectorValid", echo),
        );
        let client = client_with(&transport);
        let ids = vec!["A".to_string(), "B".to_string(), "C".to_string()];

        let submitted = client
            .monitor()
            .disable_collectors(&ids)
            .await
            .expect("disable");

        assert_eq!(submitted, vec!["A".to_string(), "C".to_string()]);
        let puts = transport.calls_to(Method::PUT, "monitorsetting/monitor_collectorValid");
        assert_eq!(puts.len(), 1);
        assert_eq!(
            puts[0].body,
            Some(json!({"monitorIds": ["A", "C"], "validFlg": false}))
        );
    }

    #[tokio::test]
    async fn disable_collectors_keeps_unreadable_monitors() {
        let transport = Arc::new(
            MockTransport::new()
                .on(
                    Method::GET,
                    "monitorsetting/monitor/GONE",
                    500,
                    json!({"message": "boom"}),
                )
                .on_fn(Method::PUT, "monitorsetting/monitor_collectorValid", echo),
        );
        let client = client_with(&transport);

        let submitted = client
            .monitor()
            .disable_collectors(&["GONE".to_string()])
            .await
            .expect("disable");
        assert_eq!(submitted, vec!["GONE".to_string()]);
    }

    #[tokio::test]
    async fn empty_batches_make_no_calls() {
        let transport = Arc::new(MockTransport::new());
        let client = client_with(&transport);
        let monitors = client.monitor();

        monitors.enable_monitors(&[]).await.expect("enable");
        monitors.disable_monitors(&[]).await.expect("disable");
        monitors.enable_collectors(&[]).await.expect("collectors");
        assert!(monitors.disable_collectors(&[]).await.expect("skip").is_empty());
        monitors.delete_monitors(&[]).await.expect("delete");

        assert_eq!(transport.total_calls(), 0);
    }

    #[tokio::test]
    async fn delete_sends_id_list_in_body() {
        let transport = Arc::new(MockTransport::new().on(
            Method::DELETE,
            "monitorsetting/monitor",
            204,
            json!({}),
        ));
        let client = client_with(&transport);

        client
            .monitor()
            .delete_monitors(&["PING_01".to_string()])
            .await
            .expect("delete");

        let calls = transport.calls_to(Method::DELETE, "monitorsetting/monitor");
        assert_eq!(calls[0].body, Some(json!({"monitorIdList": ["PING_01"]})));
        assert!(calls[0].query.is_empty());
    }

    #[tokio::test]
    async fn filtered_listing_uses_search_endpoint() {
        let transport = Arc::new(
            MockTransport::new()
                .on(Method::GET, "monitorsetting/monitor", 200, json!([]))
                .on(
                    Method::POST,
                    "monitorsetting/monitor_search",
                    200,
                    json!([{"monitorId": "PING_01", "monitorTypeId": "MON_PNG_N"}]),
                ),
        );
        let client = client_with(&transport);

        let filter = GetMonitorListRequest {
            facility_id: Some("NODE01".to_string()),
            ..Default::default()
        };
        let found = client
            .monitor()
            .list_monitors(Some(&filter))
            .await
            .expect("search");
        assert_eq!(found[0].info.monitor_type_id.as_deref(), Some("MON_PNG_N"));

        let searches = transport.calls_to(Method::POST, "monitorsetting/monitor_search");
        assert_eq!(searches[0].body, Some(json!({"facilityId": "NODE01"})));
    }

    #[tokio::test]
    async fn typed_endpoints_route_by_kind_path() {
        let transport = Arc::new(
            MockTransport::new()
                .on(Method::GET, "monitorsetting/serviceport", 200, json!([]))
                .on(Method::GET, "monitorsetting/customNumeric", 200, json!([])),
        );
        let client = client_with(&transport);

        assert!(client.monitor().list_port().await.expect("port").is_empty());
        assert!(client.monitor().list_custom().await.expect("custom").is_empty());
    }
}
