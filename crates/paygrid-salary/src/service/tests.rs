//! Service tests over in-memory stores
//!
//! The fakes implement the persistence traits with plain vectors so the
//! migration workflow and the composition guards can be exercised without a
//! database. The atomic cross-table semantics of the SQL backend are
//! mirrored here: a move either lands the active row and consumes the
//! catalog row, or changes nothing.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use uuid::Uuid;

use paygrid_api::model::{ComponentSource, ComponentStatus, ShowOnPayslip};
use paygrid_api::paging::{PagingRequest, SystemPagingRequest};
use paygrid_api::Page;
use paygrid_common::PaygridError;
use paygrid_persistence::model::{ComponentDraft, SalaryComponent, SystemComponent};
use paygrid_persistence::traits::{CompositionPersistence, SystemCatalogPersistence};

use super::{composition, system};

fn ts(offset_minutes: i64) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
        + Duration::minutes(offset_minutes)
}

fn system_component(code: &str, offset_minutes: i64) -> SystemComponent {
    SystemComponent {
        id: Uuid::new_v4(),
        code: code.to_string(),
        name: format!("{} component", code),
        component_type: "allowance".to_string(),
        nature: "income".to_string(),
        tax_option: None,
        tax_deduction: false,
        quota: None,
        allow_exceed_quota: false,
        value_type: "currency".to_string(),
        value_calculation: "formula".to_string(),
        sum_scope: None,
        org_level: None,
        component_to_sum: None,
        value_formula: Some("BASE * 0.1".to_string()),
        description: None,
        show_on_payslip: ShowOnPayslip::Yes,
        gmt_create: ts(offset_minutes),
    }
}

fn draft(code: &str) -> ComponentDraft {
    ComponentDraft {
        code: code.to_string(),
        name: format!("{} component", code),
        component_type: "allowance".to_string(),
        nature: "income".to_string(),
        tax_option: "taxable".to_string(),
        value_type: "currency".to_string(),
        value_calculation: "formula".to_string(),
        ..Default::default()
    }
}

#[derive(Clone)]
struct ActiveRow {
    id: Uuid,
    draft: ComponentDraft,
    gmt_create: NaiveDateTime,
}

impl ActiveRow {
    fn to_component(&self) -> SalaryComponent {
        SalaryComponent {
            id: self.id,
            code: self.draft.code.clone(),
            name: self.draft.name.clone(),
            component_type: self.draft.component_type.clone(),
            nature: self.draft.nature.clone(),
            tax_option: Some(self.draft.tax_option.clone()),
            tax_deduction: self.draft.tax_deduction,
            quota: self.draft.quota.clone(),
            allow_exceed_quota: self.draft.allow_exceed_quota,
            value_type: self.draft.value_type.clone(),
            value_calculation: self.draft.value_calculation.clone(),
            sum_scope: self.draft.sum_scope.clone(),
            org_level: self.draft.org_level.clone(),
            component_to_sum: self.draft.component_to_sum.clone(),
            value_formula: self.draft.value_formula.clone(),
            description: self.draft.description.clone(),
            show_on_payslip: self.draft.show_on_payslip,
            source: self.draft.source,
            status: self.draft.status,
            taxable_part: self.draft.taxable_part.clone(),
            tax_exempt_part: self.draft.tax_exempt_part.clone(),
            organization_ids: self.draft.organization_ids.clone(),
            gmt_create: self.gmt_create,
            gmt_modified: self.gmt_create,
        }
    }
}

// ============================================================================
// Catalog fake
// ============================================================================

#[derive(Default)]
struct FakeCatalog {
    systems: Mutex<Vec<SystemComponent>>,
    active: Mutex<Vec<ActiveRow>>,
    root: Option<Uuid>,
    fail_moves: Mutex<Vec<Uuid>>,
}

impl FakeCatalog {
    fn with_root() -> (Self, Uuid) {
        let root = Uuid::new_v4();
        let catalog = Self {
            root: Some(root),
            ..Default::default()
        };
        (catalog, root)
    }

    fn seed_system(&self, code: &str, offset_minutes: i64) -> Uuid {
        let component = system_component(code, offset_minutes);
        let id = component.id;
        self.systems.lock().unwrap().push(component);
        id
    }

    fn seed_active(&self, code: &str, status: ComponentStatus) -> Uuid {
        let id = Uuid::new_v4();
        let mut row_draft = draft(code);
        row_draft.name = format!("{} (old)", code);
        row_draft.status = status;
        self.active.lock().unwrap().push(ActiveRow {
            id,
            draft: row_draft,
            gmt_create: ts(0),
        });
        id
    }

    fn fail_move_of(&self, id: Uuid) {
        self.fail_moves.lock().unwrap().push(id);
    }

    fn system_codes(&self) -> Vec<String> {
        self.systems
            .lock()
            .unwrap()
            .iter()
            .map(|c| c.code.clone())
            .collect()
    }

    fn active_rows(&self) -> Vec<ActiveRow> {
        self.active.lock().unwrap().clone()
    }
}

#[async_trait]
impl SystemCatalogPersistence for FakeCatalog {
    async fn get_all(&self) -> anyhow::Result<Vec<SystemComponent>> {
        let mut rows = self.systems.lock().unwrap().clone();
        rows.sort_by(|a, b| b.gmt_create.cmp(&a.gmt_create).then(b.id.cmp(&a.id)));
        Ok(rows)
    }

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<SystemComponent>> {
        Ok(self
            .systems
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn get_paged(
        &self,
        request: &SystemPagingRequest,
    ) -> anyhow::Result<Page<SystemComponent>> {
        let mut rows = self.systems.lock().unwrap().clone();
        rows.sort_by(|a, b| b.gmt_create.cmp(&a.gmt_create).then(b.id.cmp(&a.id)));

        let page_number = request.page_number.max(1);
        let page_size = request.page_size.max(1);
        let total = rows.len() as u64;
        let data = rows
            .into_iter()
            .skip(((page_number - 1) * page_size) as usize)
            .take(page_size as usize)
            .collect();

        Ok(Page::new(total, page_number, page_size, data))
    }

    async fn active_code_exists(&self, code: &str) -> anyhow::Result<bool> {
        Ok(self
            .active
            .lock()
            .unwrap()
            .iter()
            .any(|r| r.draft.code == code && r.draft.status == ComponentStatus::Active))
    }

    async fn active_id_by_code(&self, code: &str) -> anyhow::Result<Option<Uuid>> {
        Ok(self
            .active
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.draft.code == code && r.draft.status == ComponentStatus::Active)
            .map(|r| r.id))
    }

    async fn root_organization_id(&self) -> anyhow::Result<Option<Uuid>> {
        Ok(self.root)
    }

    async fn move_into_composition(
        &self,
        id: Uuid,
        draft: &ComponentDraft,
    ) -> anyhow::Result<Uuid> {
        if self.fail_moves.lock().unwrap().contains(&id) {
            anyhow::bail!("storage failure");
        }

        let mut systems = self.systems.lock().unwrap();
        let position = systems.iter().position(|c| c.id == id);
        let Some(position) = position else {
            return Err(PaygridError::NotFound(format!("system component {}", id)).into());
        };

        let new_id = Uuid::new_v4();
        self.active.lock().unwrap().push(ActiveRow {
            id: new_id,
            draft: draft.clone(),
            gmt_create: ts(0),
        });
        systems.remove(position);

        Ok(new_id)
    }

    async fn overwrite_composition(
        &self,
        id: Uuid,
        target: Uuid,
        draft: &ComponentDraft,
    ) -> anyhow::Result<()> {
        let mut systems = self.systems.lock().unwrap();
        let position = systems.iter().position(|c| c.id == id);
        let Some(position) = position else {
            return Err(PaygridError::NotFound(format!("system component {}", id)).into());
        };

        let mut active = self.active.lock().unwrap();
        let Some(row) = active.iter_mut().find(|r| r.id == target) else {
            return Err(PaygridError::NotFound(format!("salary component {}", target)).into());
        };
        row.draft = draft.clone();
        systems.remove(position);

        Ok(())
    }
}

// ============================================================================
// Composition fake
// ============================================================================

#[derive(Default)]
struct FakeComposition {
    rows: Mutex<Vec<ActiveRow>>,
}

impl FakeComposition {
    fn seed(&self, code: &str, status: ComponentStatus, source: ComponentSource) -> Uuid {
        let id = Uuid::new_v4();
        let mut row_draft = draft(code);
        row_draft.status = status;
        row_draft.source = source;
        self.rows.lock().unwrap().push(ActiveRow {
            id,
            draft: row_draft,
            gmt_create: ts(0),
        });
        id
    }

    fn contains(&self, id: Uuid) -> bool {
        self.rows.lock().unwrap().iter().any(|r| r.id == id)
    }
}

#[async_trait]
impl CompositionPersistence for FakeComposition {
    async fn create(&self, draft: &ComponentDraft) -> anyhow::Result<Uuid> {
        let id = Uuid::new_v4();
        self.rows.lock().unwrap().push(ActiveRow {
            id,
            draft: draft.clone(),
            gmt_create: ts(0),
        });
        Ok(id)
    }

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<SalaryComponent>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .map(ActiveRow::to_component))
    }

    async fn get_all(&self) -> anyhow::Result<Vec<SalaryComponent>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .map(ActiveRow::to_component)
            .collect())
    }

    async fn update(&self, id: Uuid, draft: &ComponentDraft) -> anyhow::Result<bool> {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|r| r.id == id) {
            Some(row) => {
                row.draft = draft.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| r.id != id);
        Ok(rows.len() < before)
    }

    async fn is_code_taken(&self, code: &str, exclude: Option<Uuid>) -> anyhow::Result<bool> {
        Ok(self.rows.lock().unwrap().iter().any(|r| {
            r.draft.code == code
                && r.draft.status == ComponentStatus::Active
                && Some(r.id) != exclude
        }))
    }

    async fn update_status(&self, id: Uuid, status: ComponentStatus) -> anyhow::Result<bool> {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|r| r.id == id) {
            Some(row) => {
                row.draft.status = status;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn bulk_update_status(
        &self,
        ids: &[Uuid],
        status: ComponentStatus,
    ) -> anyhow::Result<()> {
        let mut rows = self.rows.lock().unwrap();
        for row in rows.iter_mut() {
            if ids.contains(&row.id) {
                row.draft.status = status;
            }
        }
        Ok(())
    }

    async fn get_paged(&self, request: &PagingRequest) -> anyhow::Result<Page<SalaryComponent>> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| b.gmt_create.cmp(&a.gmt_create).then(b.id.cmp(&a.id)));

        let page_number = request.page_number.max(1);
        let page_size = request.page_size.max(1);
        let total = rows.len() as u64;
        let data = rows
            .iter()
            .skip(((page_number - 1) * page_size) as usize)
            .take(page_size as usize)
            .map(ActiveRow::to_component)
            .collect();

        Ok(Page::new(total, page_number, page_size, data))
    }
}

fn error_kind(err: &anyhow::Error) -> Option<&PaygridError> {
    PaygridError::from_anyhow(err)
}

// ============================================================================
// Migration workflow
// ============================================================================

#[tokio::test]
async fn test_move_consumes_catalog_row() {
    let (catalog, root) = FakeCatalog::with_root();
    let id = catalog.seed_system("SENIORITY", 0);

    let new_id = system::move_to_composition(&catalog, id).await.unwrap();

    assert!(catalog.system_codes().is_empty());
    let rows = catalog.active_rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, new_id);
    assert_eq!(rows[0].draft.code, "SENIORITY");
    assert_eq!(rows[0].draft.source, ComponentSource::System);
    assert_eq!(rows[0].draft.status, ComponentStatus::Active);
    assert_eq!(rows[0].draft.organization_ids, vec![root]);
}

#[tokio::test]
async fn test_move_unknown_id_is_not_found() {
    let (catalog, _) = FakeCatalog::with_root();

    let err = system::move_to_composition(&catalog, Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(error_kind(&err), Some(PaygridError::NotFound(_))));
}

#[tokio::test]
async fn test_move_without_root_changes_nothing() {
    let catalog = FakeCatalog::default();
    let id = catalog.seed_system("SENIORITY", 0);

    let err = system::move_to_composition(&catalog, id).await.unwrap_err();
    assert!(matches!(
        error_kind(&err),
        Some(PaygridError::InvalidState(_))
    ));
    assert_eq!(catalog.system_codes(), vec!["SENIORITY".to_string()]);
    assert!(catalog.active_rows().is_empty());
}

#[tokio::test]
async fn test_overwrite_rewrites_target_in_place() {
    let (catalog, root) = FakeCatalog::with_root();
    let target = catalog.seed_active("SENIORITY", ComponentStatus::Active);
    let id = catalog.seed_system("SENIORITY", 0);

    let overwritten = system::overwrite_composition(&catalog, id).await.unwrap();

    assert_eq!(overwritten, target);
    assert!(catalog.system_codes().is_empty());

    let rows = catalog.active_rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, target);
    assert_eq!(rows[0].draft.code, "SENIORITY");
    assert_eq!(rows[0].draft.name, "SENIORITY component");
    assert_eq!(rows[0].draft.source, ComponentSource::System);
    assert_eq!(rows[0].draft.organization_ids, vec![root]);
}

#[tokio::test]
async fn test_overwrite_without_target_is_invalid_state() {
    let (catalog, _) = FakeCatalog::with_root();
    let id = catalog.seed_system("SENIORITY", 0);

    let err = system::overwrite_composition(&catalog, id).await.unwrap_err();
    assert!(matches!(
        error_kind(&err),
        Some(PaygridError::InvalidState(_))
    ));
    // The catalog row is untouched
    assert_eq!(catalog.system_codes(), vec!["SENIORITY".to_string()]);
}

#[tokio::test]
async fn test_overwrite_ignores_inactive_code_holder() {
    let (catalog, _) = FakeCatalog::with_root();
    catalog.seed_active("SENIORITY", ComponentStatus::Inactive);
    let id = catalog.seed_system("SENIORITY", 0);

    let err = system::overwrite_composition(&catalog, id).await.unwrap_err();
    assert!(matches!(
        error_kind(&err),
        Some(PaygridError::InvalidState(_))
    ));
}

#[tokio::test]
async fn test_move_multiple_skips_existing_codes() {
    let (catalog, _) = FakeCatalog::with_root();
    let a = catalog.seed_system("ALPHA", 0);
    let b = catalog.seed_system("BRAVO", 1);
    let c = catalog.seed_system("CHARLIE", 2);
    catalog.seed_active("BRAVO", ComponentStatus::Active);

    let result = system::move_multiple(&catalog, &[a, b, c]).await.unwrap();

    assert_eq!(result.success_count, 2);
    assert_eq!(result.failed_count, 1);
    assert_eq!(result.skipped_codes, vec!["BRAVO".to_string()]);
    // The skipped entry stays in the catalog, the moved ones are gone
    assert_eq!(catalog.system_codes(), vec!["BRAVO".to_string()]);
}

#[tokio::test]
async fn test_move_multiple_inactive_code_does_not_block() {
    let (catalog, _) = FakeCatalog::with_root();
    let a = catalog.seed_system("ALPHA", 0);
    catalog.seed_active("ALPHA", ComponentStatus::Inactive);

    let result = system::move_multiple(&catalog, &[a]).await.unwrap();

    assert_eq!(result.success_count, 1);
    assert_eq!(result.failed_count, 0);
    assert!(result.skipped_codes.is_empty());
}

#[tokio::test]
async fn test_move_multiple_unknown_id_counts_failed() {
    let (catalog, _) = FakeCatalog::with_root();
    let a = catalog.seed_system("ALPHA", 0);

    let result = system::move_multiple(&catalog, &[Uuid::new_v4(), a])
        .await
        .unwrap();

    assert_eq!(result.success_count, 1);
    assert_eq!(result.failed_count, 1);
    assert!(result.skipped_codes.is_empty());
    assert!(catalog.system_codes().is_empty());
}

#[tokio::test]
async fn test_move_multiple_storage_failure_is_isolated() {
    let (catalog, _) = FakeCatalog::with_root();
    let a = catalog.seed_system("ALPHA", 0);
    let b = catalog.seed_system("BRAVO", 1);
    catalog.fail_move_of(a);

    let result = system::move_multiple(&catalog, &[a, b]).await.unwrap();

    assert_eq!(result.success_count, 1);
    assert_eq!(result.failed_count, 1);
    assert!(result.skipped_codes.is_empty());
    // The failed entry is not consumed from the catalog
    assert_eq!(catalog.system_codes(), vec!["ALPHA".to_string()]);
}

#[tokio::test]
async fn test_move_multiple_without_root_aborts() {
    let catalog = FakeCatalog::default();
    let a = catalog.seed_system("ALPHA", 0);

    let err = system::move_multiple(&catalog, &[a]).await.unwrap_err();
    assert!(matches!(
        error_kind(&err),
        Some(PaygridError::InvalidState(_))
    ));
    assert_eq!(catalog.system_codes(), vec!["ALPHA".to_string()]);
}

#[tokio::test]
async fn test_check_code_exists() {
    let (catalog, _) = FakeCatalog::with_root();
    let id = catalog.seed_system("SENIORITY", 0);

    assert!(!system::check_code_exists(&catalog, id).await.unwrap());

    catalog.seed_active("SENIORITY", ComponentStatus::Active);
    assert!(system::check_code_exists(&catalog, id).await.unwrap());

    let err = system::check_code_exists(&catalog, Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(error_kind(&err), Some(PaygridError::NotFound(_))));
}

#[tokio::test]
async fn test_check_code_ignores_inactive_rows() {
    let (catalog, _) = FakeCatalog::with_root();
    let id = catalog.seed_system("SENIORITY", 0);
    catalog.seed_active("SENIORITY", ComponentStatus::Inactive);

    assert!(!system::check_code_exists(&catalog, id).await.unwrap());
}

#[tokio::test]
async fn test_catalog_pages_have_no_overlap_or_gap() {
    let (catalog, _) = FakeCatalog::with_root();
    for i in 0..25 {
        catalog.seed_system(&format!("PC{:02}", i), i);
    }

    let mut seen = Vec::new();
    for page_number in 1..=3 {
        let request = SystemPagingRequest {
            page_number,
            page_size: 10,
            ..Default::default()
        };
        let page = system::get_paged(&catalog, &request).await.unwrap();
        assert_eq!(page.total_records, 25);
        seen.extend(page.data.into_iter().map(|c| c.id));
    }

    assert_eq!(seen.len(), 25);
    let unique = seen.iter().collect::<std::collections::HashSet<_>>();
    assert_eq!(unique.len(), 25);
}

#[tokio::test]
async fn test_catalog_paging_rejects_invalid_window() {
    let (catalog, _) = FakeCatalog::with_root();
    let request = SystemPagingRequest {
        page_number: 0,
        ..Default::default()
    };

    let err = system::get_paged(&catalog, &request).await.unwrap_err();
    assert!(matches!(
        error_kind(&err),
        Some(PaygridError::Validation(_))
    ));
}

// ============================================================================
// Composition service
// ============================================================================

#[tokio::test]
async fn test_create_rejects_active_duplicate_code() {
    let store = FakeComposition::default();
    store.seed("MEAL", ComponentStatus::Active, ComponentSource::Manual);

    let err = composition::create(&store, &draft("MEAL")).await.unwrap_err();
    assert!(matches!(error_kind(&err), Some(PaygridError::Duplicate(_))));
}

#[tokio::test]
async fn test_create_allows_reuse_of_inactive_code() {
    let store = FakeComposition::default();
    store.seed("MEAL", ComponentStatus::Inactive, ComponentSource::Manual);

    let id = composition::create(&store, &draft("MEAL")).await.unwrap();
    assert!(store.contains(id));
}

#[tokio::test]
async fn test_update_rejects_code_taken_by_other_row() {
    let store = FakeComposition::default();
    store.seed("MEAL", ComponentStatus::Active, ComponentSource::Manual);
    let id = store.seed("PHONE", ComponentStatus::Active, ComponentSource::Manual);

    let err = composition::update(&store, id, &draft("MEAL"))
        .await
        .unwrap_err();
    assert!(matches!(error_kind(&err), Some(PaygridError::Duplicate(_))));

    // Keeping its own code is not a collision
    assert!(composition::update(&store, id, &draft("PHONE")).await.unwrap());
}

#[tokio::test]
async fn test_delete_refuses_system_source() {
    let store = FakeComposition::default();
    let id = store.seed("BASE", ComponentStatus::Active, ComponentSource::System);

    let err = composition::delete(&store, id).await.unwrap_err();
    assert!(matches!(
        error_kind(&err),
        Some(PaygridError::InvalidState(_))
    ));
    assert!(store.contains(id));
}

#[tokio::test]
async fn test_delete_removes_manual_component() {
    let store = FakeComposition::default();
    let id = store.seed("MEAL", ComponentStatus::Active, ComponentSource::Manual);

    assert!(composition::delete(&store, id).await.unwrap());
    assert!(!store.contains(id));
}

#[tokio::test]
async fn test_update_status_unknown_is_not_found() {
    let store = FakeComposition::default();

    let err = composition::update_status(&store, Uuid::new_v4(), ComponentStatus::Inactive)
        .await
        .unwrap_err();
    assert!(matches!(error_kind(&err), Some(PaygridError::NotFound(_))));
}

#[tokio::test]
async fn test_get_paged_rejects_invalid_window() {
    let store = FakeComposition::default();
    let request = PagingRequest {
        page_size: 0,
        ..Default::default()
    };

    let err = composition::get_paged(&store, &request).await.unwrap_err();
    assert!(matches!(
        error_kind(&err),
        Some(PaygridError::Validation(_))
    ));
}
