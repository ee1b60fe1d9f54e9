//! Binds the behavioural feature files to the step registry.

use crate::fixtures::{EvaluationContext, MergeContext, evaluation_context, merge_context};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/merge_objects.feature",
    fixtures = [merge_context: MergeContext]
);
scenarios!(
    "tests/features/evaluate_setting.feature",
    fixtures = [evaluation_context: EvaluationContext]
);
