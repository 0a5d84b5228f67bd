//! Filter compiler for the paged component listings
//!
//! Translates the named per-column filters, free-text search, enum-backed
//! filters, and organization membership of a paging request into a
//! conjunctive SeaORM `Condition`. User-supplied values only ever travel as
//! bound query values; nothing is spliced into SQL text.
//!
//! Enum-backed filters fail open: a value that does not map to a stored
//! discrete representation emits no predicate rather than an error.

use sea_orm::sea_query::Query;
use sea_orm::*;
use uuid::Uuid;

use paygrid_api::filter::{FilterCondition, FilterOperator};
use paygrid_api::model::{ComponentSource, ShowOnPayslip};
use paygrid_api::paging::{PagingRequest, SystemPagingRequest};

use crate::entity::{salary_component, salary_component_org, salary_component_system};

/// Clamp the page window so offset arithmetic cannot underflow. Boundary
/// validation on the request types is the authoritative rejection point;
/// this only keeps the compiler total.
pub(crate) fn page_window(page_number: u64, page_size: u64) -> (u64, u64) {
    (page_number.max(1), page_size.max(1))
}

fn contains_pattern(value: &str) -> String {
    format!("%{}%", value)
}

/// Compile one text-column filter into a condition, or nothing when the
/// filter does not apply.
///
/// The negated operators admit NULL: a row with no value in the column is
/// not considered to contain (or equal) anything, so `notContains` and
/// `notEquals` match it while `contains` and `equals` do not.
pub(crate) fn text_filter<C: ColumnTrait>(
    column: C,
    filter: Option<&FilterCondition>,
) -> Option<Condition> {
    let filter = filter?;
    match filter.condition {
        FilterOperator::Contains => {
            let pattern = contains_pattern(filter.effective_value()?);
            Some(Condition::all().add(column.like(pattern.as_str())))
        }
        FilterOperator::NotContains => {
            let pattern = contains_pattern(filter.effective_value()?);
            Some(
                Condition::any()
                    .add(column.not_like(pattern.as_str()))
                    .add(column.is_null()),
            )
        }
        FilterOperator::Equals => {
            Some(Condition::all().add(column.eq(filter.effective_value()?)))
        }
        FilterOperator::NotEquals => Some(
            Condition::any()
                .add(column.ne(filter.effective_value()?))
                .add(column.is_null()),
        ),
        FilterOperator::StartsWith => {
            let pattern = format!("{}%", filter.effective_value()?);
            Some(Condition::all().add(column.like(pattern.as_str())))
        }
        FilterOperator::EndsWith => {
            let pattern = format!("%{}", filter.effective_value()?);
            Some(Condition::all().add(column.like(pattern.as_str())))
        }
        FilterOperator::Empty => Some(
            Condition::any()
                .add(column.is_null())
                .add(column.eq("")),
        ),
        FilterOperator::NotEmpty => Some(
            Condition::all()
                .add(column.is_not_null())
                .add(column.ne("")),
        ),
    }
}

/// Compile a presence filter: `equals true` means the column holds a value,
/// `equals false` means it is null. Only equals/notEquals apply.
pub(crate) fn presence_filter<C: ColumnTrait>(
    column: C,
    filter: Option<&FilterCondition>,
) -> Option<Condition> {
    let filter = filter?;
    let wants_present = match filter.value.as_deref()? {
        "true" => true,
        "false" => false,
        _ => return None,
    };
    let present = match filter.condition {
        FilterOperator::Equals => wants_present,
        FilterOperator::NotEquals => !wants_present,
        _ => return None,
    };
    Some(if present {
        Condition::all().add(column.is_not_null())
    } else {
        Condition::all().add(column.is_null())
    })
}

/// Compile a boolean-column filter. Only equals/notEquals apply; values
/// other than true/false emit nothing.
pub(crate) fn bool_filter<C: ColumnTrait>(
    column: C,
    filter: Option<&FilterCondition>,
) -> Option<Condition> {
    let filter = filter?;
    let wanted = match filter.value.as_deref()? {
        "true" => true,
        "false" => false,
        _ => return None,
    };
    let expected = match filter.condition {
        FilterOperator::Equals => wanted,
        FilterOperator::NotEquals => !wanted,
        _ => return None,
    };
    Some(Condition::all().add(column.eq(expected)))
}

/// Compile a discrete-column filter by mapping the string value to its
/// stored integer. An unmapped value emits nothing.
pub(crate) fn discrete_filter<C, F>(
    column: C,
    filter: Option<&FilterCondition>,
    map: F,
) -> Option<Condition>
where
    C: ColumnTrait,
    F: Fn(&str) -> Option<i32>,
{
    let filter = filter?;
    let discrete = map(filter.effective_value()?)?;
    match filter.condition {
        FilterOperator::Equals => Some(Condition::all().add(column.eq(discrete))),
        FilterOperator::NotEquals => Some(Condition::all().add(column.ne(discrete))),
        _ => None,
    }
}

/// Free-text search across the code and name columns
pub(crate) fn search_filter<C: ColumnTrait>(code: C, name: C, text: &str) -> Option<Condition> {
    if text.trim().is_empty() {
        return None;
    }
    let pattern = contains_pattern(text);
    Some(
        Condition::any()
            .add(code.like(pattern.as_str()))
            .add(name.like(pattern.as_str())),
    )
}

/// Restrict to components linked to any of the requested organization units
pub(crate) fn organization_filter(organization_ids: &[Uuid]) -> Option<Condition> {
    if organization_ids.is_empty() {
        return None;
    }
    let member = Query::select()
        .column(salary_component_org::Column::ComponentId)
        .distinct()
        .from(salary_component_org::Entity)
        .and_where(
            salary_component_org::Column::OrganizationId
                .is_in(organization_ids.iter().copied()),
        )
        .to_owned();
    Some(Condition::all().add(salary_component::Column::Id.in_subquery(member)))
}

fn payslip_value(value: &str) -> Option<i32> {
    value.parse::<ShowOnPayslip>().ok().map(|v| v.as_i32())
}

fn source_value(value: &str) -> Option<i32> {
    value.parse::<ComponentSource>().ok().map(|v| v.as_i32())
}

/// The full conjunctive predicate of an active-listing request
pub(crate) fn active_conditions(request: &PagingRequest) -> Condition {
    use salary_component::Column;

    let mut condition = Condition::all();

    if let Some(text) = request.search_text.as_deref() {
        condition = condition.add_option(search_filter(Column::Code, Column::Name, text));
    }
    if let Some(status) = request.status {
        condition = condition.add(Column::Status.eq(status.as_i32()));
    }
    if let Some(organization_ids) = request.organization_ids.as_deref() {
        condition = condition.add_option(organization_filter(organization_ids));
    }

    condition
        .add_option(text_filter(Column::Code, request.code_filter.as_ref()))
        .add_option(text_filter(Column::Name, request.name_filter.as_ref()))
        .add_option(text_filter(
            Column::ComponentType,
            request.type_filter.as_ref(),
        ))
        .add_option(text_filter(Column::Nature, request.nature_filter.as_ref()))
        .add_option(text_filter(Column::Quota, request.quota_filter.as_ref()))
        .add_option(text_filter(
            Column::ValueType,
            request.value_type_filter.as_ref(),
        ))
        .add_option(text_filter(
            Column::ValueFormula,
            request.value_filter.as_ref(),
        ))
        .add_option(text_filter(
            Column::Description,
            request.description_filter.as_ref(),
        ))
        .add_option(presence_filter(
            Column::TaxOption,
            request.taxable_filter.as_ref(),
        ))
        .add_option(bool_filter(
            Column::TaxDeduction,
            request.tax_deductible_filter.as_ref(),
        ))
        .add_option(discrete_filter(
            Column::ShowOnPayslip,
            request.show_on_payslip_filter.as_ref(),
            payslip_value,
        ))
        .add_option(discrete_filter(
            Column::Source,
            request.source_filter.as_ref(),
            source_value,
        ))
}

/// The full conjunctive predicate of a catalog-listing request
pub(crate) fn system_conditions(request: &SystemPagingRequest) -> Condition {
    use salary_component_system::Column;

    let mut condition = Condition::all();

    if let Some(text) = request.search_text.as_deref() {
        condition = condition.add_option(search_filter(Column::Code, Column::Name, text));
    }
    if let Some(component_type) = request.component_type.as_deref()
        && !component_type.trim().is_empty()
    {
        condition = condition.add(Column::ComponentType.eq(component_type));
    }

    condition
        .add_option(text_filter(Column::Code, request.code_filter.as_ref()))
        .add_option(text_filter(Column::Name, request.name_filter.as_ref()))
        .add_option(text_filter(
            Column::ComponentType,
            request.type_filter.as_ref(),
        ))
        .add_option(text_filter(Column::Nature, request.nature_filter.as_ref()))
        .add_option(text_filter(Column::Quota, request.quota_filter.as_ref()))
        .add_option(text_filter(
            Column::ValueType,
            request.value_type_filter.as_ref(),
        ))
        .add_option(text_filter(
            Column::ValueFormula,
            request.value_filter.as_ref(),
        ))
        .add_option(text_filter(
            Column::Description,
            request.description_filter.as_ref(),
        ))
        .add_option(presence_filter(
            Column::TaxOption,
            request.taxable_filter.as_ref(),
        ))
        .add_option(bool_filter(
            Column::TaxDeduction,
            request.tax_deductible_filter.as_ref(),
        ))
        .add_option(discrete_filter(
            Column::ShowOnPayslip,
            request.show_on_payslip_filter.as_ref(),
            payslip_value,
        ))
}
