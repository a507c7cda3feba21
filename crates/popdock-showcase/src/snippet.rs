//! Reproducible estimator snippets.
//!
//! Every cost cell links back to a runnable snippet for the online Sage
//! estimator, echoing the parameters and cost model the number came from.

use std::fmt::Write;

use crate::dataset::{AttackEstimate, AttackKind, CostEstimate, MODELS};

/// Build the reproduction snippet for one cost cell.
///
/// Mirrors the published page: header comments with the headline numbers,
/// parameter assignments for the instance the optimum was found on, then
/// the estimator call, using the `drop_and_solve` variants when the
/// optimum drops secret coordinates.
pub fn reproduction_snippet(estimate: &AttackEstimate, cost: &CostEstimate) -> String {
    let param = &estimate.params[cost.inst];
    let mut out = String::new();

    out.push_str("# To reproduce the estimate run this snippet on http://aleph.sagemath.org/\n");
    let _ = writeln!(out, "# Ring ops: 2^{}", cost.rop);
    let _ = writeln!(out, "# Block size: {}", cost.beta);
    let _ = writeln!(out, "# Dimension: {}", cost.dim);
    if estimate.params.len() > 1 {
        out.push_str(
            "# NOTE: This scheme relies on different hard problem instances for key recovery and message recovery.\n",
        );
        out.push_str(
            "# The code below gives the cost of the cheaper of the two attacks under the chosen cost model.\n",
        );
    }

    out.push_str("load('https://bitbucket.org/malb/lwe-estimator/raw/HEAD/estimator.py')\n");
    let _ = writeln!(out, "n = {}", param.n);
    if let Some(k) = param.k {
        let _ = writeln!(out, "# module rank k = {k}; n above is the flattened dimension");
    }
    let _ = writeln!(out, "sd = {}", param.sd);
    let _ = writeln!(out, "q = {}", param.q);
    out.push_str("alpha = sqrt(2*pi)*sd/RR(q)\n");
    out.push_str("m = n\n");
    let secret = if param.secret_distribution == "normal" {
        "\"normal\"".to_string()
    } else {
        param.secret_distribution.to_string()
    };
    let _ = writeln!(out, "secret_distribution = {secret}");
    out.push_str("success_probability = 0.99\n");
    let model_code = MODELS
        .iter()
        .find(|m| m.name == cost.model)
        .map(|m| m.code)
        .unwrap_or("None");
    let _ = writeln!(out, "reduction_cost_model = {model_code}");

    match (estimate.attack, cost.drop) {
        (AttackKind::Primal, false) => {
            out.push_str(
                "primal_usvp(n, alpha, q, secret_distribution=secret_distribution, m=m, \
                 success_probability=success_probability, reduction_cost_model=reduction_cost_model)",
            );
        }
        (AttackKind::Primal, true) => {
            out.push_str(
                "primald = partial(drop_and_solve, primal_usvp, postprocess=False, decision=False)\n",
            );
            out.push_str(
                "primald(n, alpha, q, secret_distribution=secret_distribution, m=m, \
                 success_probability=success_probability, reduction_cost_model=reduction_cost_model)",
            );
        }
        (AttackKind::Dual, false) => {
            out.push_str(
                "dual_scale(n, alpha, q, secret_distribution=secret_distribution, m=m, \
                 success_probability=success_probability, reduction_cost_model=reduction_cost_model)",
            );
        }
        (AttackKind::Dual, true) => {
            out.push_str("duald = partial(drop_and_solve, dual_scale, postprocess=True)\n");
            out.push_str(
                "duald(n, alpha, q, secret_distribution=secret_distribution, m=m, \
                 success_probability=success_probability, reduction_cost_model=reduction_cost_model)",
            );
        }
    }

    out
}

/// Dialog title for a cost cell: `"<scheme> – <model>"`.
pub fn snippet_title(estimate: &AttackEstimate, cost: &CostEstimate) -> String {
    format!("{} – {}", estimate.scheme.name, cost.model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::ESTIMATES;

    fn find(name: &str, attack: AttackKind) -> &'static AttackEstimate {
        ESTIMATES
            .iter()
            .find(|e| e.scheme.name == name && e.attack == attack)
            .unwrap()
    }

    #[test]
    fn primal_snippet_shape() {
        let est = find("NewHope", AttackKind::Primal);
        let cost = est.cost_for("Q‑Core‑Sieve").unwrap();
        let snippet = reproduction_snippet(est, cost);

        assert!(snippet.starts_with("# To reproduce"));
        assert!(snippet.contains("n = 1024\n"));
        assert!(snippet.contains("q = 12289\n"));
        assert!(snippet.contains("secret_distribution = \"normal\"\n"));
        assert!(snippet.contains("reduction_cost_model = lambda beta, d, B: ZZ(2)**RR(0.265*beta)"));
        assert!(snippet.contains("primal_usvp(n, alpha, q"));
        assert!(!snippet.contains("drop_and_solve"));
    }

    #[test]
    fn dual_drop_snippet_uses_drop_and_solve() {
        let est = find("Lizard", AttackKind::Dual);
        let cost = est.cost_for("Core‑Sieve").unwrap();
        let snippet = reproduction_snippet(est, cost);

        assert!(snippet.contains("duald = partial(drop_and_solve, dual_scale, postprocess=True)"));
        assert!(snippet.contains("duald(n, alpha, q"));
        // Non-normal secrets are pasted verbatim.
        assert!(snippet.contains("secret_distribution = ((-1, 1), 128)\n"));
    }

    #[test]
    fn multi_param_scheme_carries_note() {
        let est = find("Frodo", AttackKind::Primal);
        let cost = est.cost_for("Core‑Sieve").unwrap();
        let snippet = reproduction_snippet(est, cost);
        assert!(snippet.contains("# NOTE: This scheme relies on different hard problem instances"));
    }

    #[test]
    fn module_schemes_note_their_rank() {
        let est = find("CRYSTALS‑Kyber", AttackKind::Primal);
        let cost = est.cost_for("Q‑Core‑Sieve").unwrap();
        let snippet = reproduction_snippet(est, cost);
        assert!(snippet.contains("# module rank k = 3"));
        assert!(snippet.contains("n = 768\n"));
    }

    #[test]
    fn title_joins_scheme_and_model() {
        let est = find("CRYSTALS‑Kyber", AttackKind::Primal);
        let cost = est.cost_for("Core‑Sieve").unwrap();
        assert_eq!(snippet_title(est, cost), "CRYSTALS‑Kyber – Core‑Sieve");
    }
}
