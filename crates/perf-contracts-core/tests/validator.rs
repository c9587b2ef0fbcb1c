// crates/perf-contracts-core/tests/validator.rs
// ============================================================================
// Module: Contract Validator Tests
// Description: Budget checks, severity tiers, and skip rules.
// Purpose: Ensure verdicts are deterministic and match the budget rules.
// ============================================================================

//! Contract validation tests for component and interaction budgets.

mod support;

use perf_contracts_core::ContractStatus;
use perf_contracts_core::FixSuggestion;
use perf_contracts_core::InteractionKind;
use perf_contracts_core::Measurement;
use perf_contracts_core::ResolvedComponentContract;
use perf_contracts_core::Severity;
use perf_contracts_core::core::validation::METRIC_MEMORY_DELTA;
use perf_contracts_core::core::validation::METRIC_RENDER_COUNT;
use perf_contracts_core::core::validation::METRIC_RENDER_TIME;
use perf_contracts_core::runtime::check_metric;
use perf_contracts_core::runtime::classify;
use perf_contracts_core::validate_against_contract;
use support::TestResult;
use support::ensure;
use support::ensure_close;
use support::fixtures::interaction;
use support::fixtures::interaction_contract;
use support::fixtures::measurement;
use support::fixtures::metrics;
use support::fixtures::render_contract;

// ============================================================================
// SECTION: Component Budgets
// ============================================================================

#[test]
fn utilization_above_threshold_warns_without_violation() -> TestResult {
    let contract = render_contract(16.0, 5.0);
    let input = Measurement::from(metrics("Button", &[14.0, 14.0, 14.0]));
    let result = validate_against_contract("Button", &input, &contract);

    let render_time = result.metrics.get(METRIC_RENDER_TIME).ok_or("renderTime missing")?;
    ensure_close(render_time.utilization, 0.875, "renderTime utilization")?;
    ensure(render_time.status == ContractStatus::Warn, "renderTime should warn")?;
    let render_count = result.metrics.get(METRIC_RENDER_COUNT).ok_or("renderCount missing")?;
    ensure_close(render_count.utilization, 0.6, "renderCount utilization")?;
    ensure(render_count.status == ContractStatus::Pass, "renderCount should pass")?;
    ensure(result.status == ContractStatus::Warn, "overall status should be warn")?;
    ensure(result.violations.is_empty(), "warn must not produce violations")?;
    Ok(())
}

#[test]
fn render_count_overage_is_severe_violation() -> TestResult {
    let contract = render_contract(16.0, 5.0);
    let input = Measurement::from(metrics("List", &[10.0; 8]));
    let result = validate_against_contract("List", &input, &contract);

    ensure(result.status == ContractStatus::Fail, "overall status should be fail")?;
    ensure(result.violations.len() == 1, format!("expected 1 violation, got {:?}", result.violations))?;
    let violation = &result.violations[0];
    ensure(violation.metric == METRIC_RENDER_COUNT, "violation should name renderCount")?;
    ensure_close(violation.budget, 5.0, "budget")?;
    ensure_close(violation.actual, 8.0, "actual")?;
    ensure_close(violation.exceeded_by_percent, 0.6, "exceededByPercent")?;
    ensure(violation.severity == Severity::Severe, "0.6 overage should be severe")?;
    Ok(())
}

#[test]
fn utilization_exactly_one_passes_or_warns_but_never_fails() -> TestResult {
    let validation = check_metric(10.0, 10.0, 0.8).ok_or("bounded metric skipped")?;
    ensure(validation.status == ContractStatus::Warn, "utilization 1.0 should warn")?;
    ensure(validation.exceeded_by.is_none(), "non-failing metric has no overage")?;
    ensure(classify(0.8, 0.8) == ContractStatus::Pass, "threshold itself should pass")?;
    ensure(classify(1.0, 1.0) == ContractStatus::Pass, "threshold of one never warns")?;
    Ok(())
}

#[test]
fn severity_tiers_use_half_open_boundaries() -> TestResult {
    let cases = [
        (11.0, 10.0, Severity::Minor),
        (5.0, 4.0, Severity::Moderate),
        (3.0, 2.0, Severity::Severe),
    ];
    for (actual, budget, expected) in cases {
        let contract = render_contract(budget, f64::INFINITY);
        let input = Measurement::from(metrics("Tiers", &[actual]));
        let result = validate_against_contract("Tiers", &input, &contract);
        let violation = result.violations.first().ok_or("expected a violation")?;
        ensure(violation.severity == expected, format!("{actual}/{budget} expected {expected}"))?;
        let validation = check_metric(actual, budget, contract.warning_threshold)
            .ok_or("bounded metric skipped")?;
        let overage = validation.exceeded_by.ok_or("failing metric must report overage")?;
        ensure(
            Severity::from_overage(overage) == expected,
            format!("overage {overage} expected {expected}"),
        )?;
    }
    Ok(())
}

#[test]
fn zero_budget_yields_zero_utilization() -> TestResult {
    let contract = render_contract(0.0, f64::INFINITY);
    let input = Measurement::from(metrics("Zero", &[4.0]));
    let result = validate_against_contract("Zero", &input, &contract);
    let render_time = result.metrics.get(METRIC_RENDER_TIME).ok_or("renderTime missing")?;
    ensure_close(render_time.utilization, 0.0, "utilization")?;
    ensure(render_time.status == ContractStatus::Pass, "zero utilization passes")?;
    ensure(render_time.utilization.is_finite(), "utilization must be finite")?;
    Ok(())
}

// ============================================================================
// SECTION: Skip Rules
// ============================================================================

#[test]
fn unbounded_contract_produces_empty_pass() -> TestResult {
    let contract = ResolvedComponentContract::default();
    let input = Measurement::from(metrics("Free", &[500.0; 40]));
    let result = validate_against_contract("Free", &input, &contract);
    ensure(result.status == ContractStatus::Pass, "unbounded contract passes")?;
    ensure(result.metrics.is_empty(), "unbounded metrics are not reported")?;
    ensure(result.violations.is_empty(), "unbounded metrics never violate")?;
    Ok(())
}

#[test]
fn plain_metrics_skip_interaction_and_memory_budgets() -> TestResult {
    let mut contract = interaction_contract(&[("click", 1.0)]);
    contract.max_memory_delta = 10.0;
    let input = Measurement::from(metrics("Plain", &[3.0; 5]));
    let result = validate_against_contract("Plain", &input, &contract);
    ensure(result.metrics.is_empty(), format!("unexpected metrics {:?}", result.metrics.keys()))?;
    ensure(result.status == ContractStatus::Pass, "plain metrics pass")?;
    Ok(())
}

// ============================================================================
// SECTION: Interaction Budgets
// ============================================================================

#[test]
fn interaction_budgets_check_renders_by_type() -> TestResult {
    let contract = interaction_contract(&[("click", 2.0), ("type", 3.0)]);
    let run = measurement(
        "Form",
        &[1.0; 5],
        vec![interaction(InteractionKind::Click, 4, 4.0), interaction(InteractionKind::Type, 1, 1.0)],
        1,
    );
    let result = validate_against_contract("Form", &Measurement::from(run), &contract);

    let click = result
        .violations
        .iter()
        .find(|violation| violation.metric == "rendersPerInteraction.click")
        .ok_or("click violation missing")?;
    ensure_close(click.exceeded_by_percent, 1.0, "click overage")?;
    ensure(click.severity == Severity::Severe, "click overage is severe")?;
    let typing = result.metrics.get("rendersPerInteraction.type").ok_or("type metric missing")?;
    ensure(typing.status == ContractStatus::Pass, "type should pass")?;
    ensure(result.violations.len() == 1, "only click violates")?;
    ensure(result.status == ContractStatus::Fail, "overall status should be fail")?;
    Ok(())
}

#[test]
fn absent_and_unknown_kinds_count_as_zero() -> TestResult {
    let contract = interaction_contract(&[("hover", 0.0), ("drag", 2.0)]);
    let run = measurement("Menu", &[1.0], vec![interaction(InteractionKind::Click, 3, 3.0)], 1);
    let result = validate_against_contract("Menu", &Measurement::from(run), &contract);
    for name in ["rendersPerInteraction.hover", "rendersPerInteraction.drag"] {
        let metric = result.metrics.get(name).ok_or(format!("{name} missing"))?;
        ensure_close(metric.actual, 0.0, name)?;
        ensure(metric.status == ContractStatus::Pass, format!("{name} should pass"))?;
    }
    Ok(())
}

#[test]
fn memory_delta_checked_when_reported() -> TestResult {
    let mut contract = ResolvedComponentContract::default();
    contract.max_memory_delta = 1_000.0;
    let reported = measurement("Grid", &[1.0], Vec::new(), 1).with_memory_delta(Some(1_500.0));
    let result = validate_against_contract("Grid", &Measurement::from(reported), &contract);
    let memory = result.metrics.get(METRIC_MEMORY_DELTA).ok_or("memoryDelta missing")?;
    ensure(memory.status == ContractStatus::Fail, "memory overage fails")?;
    ensure(result.violations[0].severity == Severity::Severe, "50% overage is severe")?;

    let unreported = measurement("Grid", &[1.0], Vec::new(), 1);
    let result = validate_against_contract("Grid", &Measurement::from(unreported), &contract);
    ensure(!result.metrics.contains_key(METRIC_MEMORY_DELTA), "unreported memory is skipped")?;
    Ok(())
}

// ============================================================================
// SECTION: Determinism
// ============================================================================

#[test]
fn validation_is_deterministic_and_ordered() -> TestResult {
    let mut contract = interaction_contract(&[("click", 1.0), ("scroll", 1.0)]);
    contract.max_render_time = 1.0;
    contract.max_render_count = 1.0;
    let run = measurement(
        "Feed",
        &[2.0, 2.0],
        vec![interaction(InteractionKind::Scroll, 2, 2.0), interaction(InteractionKind::Click, 2, 2.0)],
        7,
    );
    let input = Measurement::from(run);
    let first = validate_against_contract("Feed", &input, &contract);
    let second = validate_against_contract("Feed", &input, &contract);
    ensure(first == second, "validation must be deterministic")?;

    let order: Vec<&str> = first.violations.iter().map(|violation| violation.metric.as_str()).collect();
    ensure(
        order
            == [
                METRIC_RENDER_TIME,
                METRIC_RENDER_COUNT,
                "rendersPerInteraction.click",
                "rendersPerInteraction.scroll",
            ],
        format!("unexpected violation order {order:?}"),
    )?;
    Ok(())
}

#[test]
fn suggestions_attach_without_changing_the_verdict() -> TestResult {
    let contract = render_contract(16.0, 5.0);
    let input = Measurement::from(metrics("List", &[10.0; 8]));
    let result = validate_against_contract("List", &input, &contract);
    let suggestion = FixSuggestion {
        category: "memoization".to_string(),
        message: "wrap List rows in a memoized component".to_string(),
        location: Some("src/List.tsx".to_string()),
    };

    let annotated = result.clone().with_suggestions([suggestion.clone()]);
    ensure(annotated.suggestions == [suggestion], "suggestion should be appended")?;
    ensure(annotated.status == result.status, "suggestions must not change status")?;
    ensure(annotated.violations == result.violations, "suggestions must not change violations")?;
    ensure(result.suggestions.is_empty(), "validator never invents suggestions")?;
    Ok(())
}
