//! Static attack-cost estimates for a selection of NIST lattice schemes.
//!
//! Numbers follow the published estimator output shape: `rop` is the log2
//! ring-operation count under a BKZ cost model, `beta` the block size and
//! `dim` the lattice dimension at the optimum. The set here is a small
//! sample; the table renders whatever it is given.

/// A BKZ cost model column.
#[derive(Debug, Clone, Copy)]
pub struct CostModel {
    /// Display name.
    pub name: &'static str,
    /// Estimator expression pasted into reproduction snippets.
    pub code: &'static str,
}

/// Cost models shown as table columns.
pub const MODELS: &[CostModel] = &[
    CostModel {
        name: "Q‑Core‑Sieve",
        code: "lambda beta, d, B: ZZ(2)**RR(0.265*beta)",
    },
    CostModel {
        name: "Core‑Sieve",
        code: "lambda beta, d, B: ZZ(2)**RR(0.292*beta)",
    },
    CostModel {
        name: "Core‑Enum + O(1)",
        code: "lambda beta, d, B: ZZ(2)**RR(0.18728*beta*log(beta, 2) - 1.0192*beta + 16.1)",
    },
];

/// One parameter set of a scheme.
#[derive(Debug, Clone, Copy)]
pub struct SchemeParams {
    pub n: u32,
    pub k: Option<u32>,
    pub q: u64,
    pub sd: f64,
    pub secret_distribution: &'static str,
    pub claimed: u32,
    pub category: &'static [u8],
}

/// Scheme identity shared by all of its attack rows.
#[derive(Debug, Clone, Copy)]
pub struct SchemeInfo {
    pub name: &'static str,
    pub assumption: &'static str,
    pub primitive: &'static str,
}

/// Which attack the estimate is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackKind {
    Primal,
    Dual,
}

impl AttackKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Primal => "primal",
            Self::Dual => "dual",
        }
    }
}

/// The cost of one attack under one cost model.
#[derive(Debug, Clone, Copy)]
pub struct CostEstimate {
    /// Cost model name, matching an entry of [`MODELS`].
    pub model: &'static str,
    /// log2 of the ring operation count.
    pub rop: f64,
    /// BKZ block size at the optimum.
    pub beta: u32,
    /// Lattice dimension at the optimum.
    pub dim: u32,
    /// Whether the optimum drops and solves (sparse secrets).
    pub drop: bool,
    /// Index of the parameter set the optimum was found on.
    pub inst: usize,
}

/// One table row: a scheme, one attack, costs per model.
#[derive(Debug, Clone, Copy)]
pub struct AttackEstimate {
    pub scheme: SchemeInfo,
    pub params: &'static [SchemeParams],
    pub attack: AttackKind,
    pub costs: &'static [CostEstimate],
}

impl AttackEstimate {
    /// The cost under a given model, if it was estimated.
    pub fn cost_for(&self, model: &str) -> Option<&CostEstimate> {
        self.costs.iter().find(|c| c.model == model)
    }

    /// Claimed security: the lowest claim across parameter sets.
    pub fn claimed(&self) -> u32 {
        self.params.iter().map(|p| p.claimed).min().unwrap_or(0)
    }
}

const NEWHOPE_PARAMS: &[SchemeParams] = &[SchemeParams {
    n: 1024,
    k: None,
    q: 12289,
    sd: 2.0,
    secret_distribution: "normal",
    claimed: 233,
    category: &[5],
}];

const KYBER_PARAMS: &[SchemeParams] = &[SchemeParams {
    n: 768,
    k: Some(3),
    q: 7681,
    sd: 1.0,
    secret_distribution: "normal",
    claimed: 161,
    category: &[4],
}];

const FRODO_PARAMS: &[SchemeParams] = &[
    SchemeParams {
        n: 752,
        k: None,
        q: 32768,
        sd: 1.32,
        secret_distribution: "normal",
        claimed: 103,
        category: &[1],
    },
    SchemeParams {
        n: 864,
        k: None,
        q: 32768,
        sd: 1.51,
        secret_distribution: "normal",
        claimed: 150,
        category: &[3],
    },
];

const SABER_PARAMS: &[SchemeParams] = &[SchemeParams {
    n: 768,
    k: Some(3),
    q: 8192,
    sd: 2.29,
    secret_distribution: "((-4, 4), 768)",
    claimed: 180,
    category: &[3],
}];

const LIZARD_PARAMS: &[SchemeParams] = &[SchemeParams {
    n: 1024,
    k: None,
    q: 2048,
    sd: 1.12,
    secret_distribution: "((-1, 1), 128)",
    claimed: 195,
    category: &[3],
}];

/// The showcase dataset: primal and dual rows for a few LWE schemes.
pub const ESTIMATES: &[AttackEstimate] = &[
    AttackEstimate {
        scheme: SchemeInfo {
            name: "NewHope",
            assumption: "RLWE",
            primitive: "KEM",
        },
        params: NEWHOPE_PARAMS,
        attack: AttackKind::Primal,
        costs: &[
            CostEstimate {
                model: "Q‑Core‑Sieve",
                rop: 248.2,
                beta: 937,
                dim: 1979,
                drop: false,
                inst: 0,
            },
            CostEstimate {
                model: "Core‑Sieve",
                rop: 273.5,
                beta: 937,
                dim: 1979,
                drop: false,
                inst: 0,
            },
            CostEstimate {
                model: "Core‑Enum + O(1)",
                rop: 1346.9,
                beta: 937,
                dim: 1979,
                drop: false,
                inst: 0,
            },
        ],
    },
    AttackEstimate {
        scheme: SchemeInfo {
            name: "NewHope",
            assumption: "RLWE",
            primitive: "KEM",
        },
        params: NEWHOPE_PARAMS,
        attack: AttackKind::Dual,
        costs: &[
            CostEstimate {
                model: "Q‑Core‑Sieve",
                rop: 251.8,
                beta: 950,
                dim: 2031,
                drop: false,
                inst: 0,
            },
            CostEstimate {
                model: "Core‑Sieve",
                rop: 277.4,
                beta: 950,
                dim: 2031,
                drop: false,
                inst: 0,
            },
        ],
    },
    AttackEstimate {
        scheme: SchemeInfo {
            name: "CRYSTALS‑Kyber",
            assumption: "MLWE",
            primitive: "KEM",
        },
        params: KYBER_PARAMS,
        attack: AttackKind::Primal,
        costs: &[
            CostEstimate {
                model: "Q‑Core‑Sieve",
                rop: 175.2,
                beta: 661,
                dim: 1424,
                drop: false,
                inst: 0,
            },
            CostEstimate {
                model: "Core‑Sieve",
                rop: 193.1,
                beta: 661,
                dim: 1424,
                drop: false,
                inst: 0,
            },
            CostEstimate {
                model: "Core‑Enum + O(1)",
                rop: 874.5,
                beta: 661,
                dim: 1424,
                drop: false,
                inst: 0,
            },
        ],
    },
    AttackEstimate {
        scheme: SchemeInfo {
            name: "CRYSTALS‑Kyber",
            assumption: "MLWE",
            primitive: "KEM",
        },
        params: KYBER_PARAMS,
        attack: AttackKind::Dual,
        costs: &[
            CostEstimate {
                model: "Q‑Core‑Sieve",
                rop: 178.9,
                beta: 675,
                dim: 1476,
                drop: false,
                inst: 0,
            },
            CostEstimate {
                model: "Core‑Sieve",
                rop: 197.2,
                beta: 675,
                dim: 1476,
                drop: false,
                inst: 0,
            },
        ],
    },
    AttackEstimate {
        scheme: SchemeInfo {
            name: "Frodo",
            assumption: "LWE",
            primitive: "KEM",
        },
        params: FRODO_PARAMS,
        attack: AttackKind::Primal,
        costs: &[
            CostEstimate {
                model: "Q‑Core‑Sieve",
                rop: 132.4,
                beta: 500,
                dim: 1402,
                drop: false,
                inst: 0,
            },
            CostEstimate {
                model: "Core‑Sieve",
                rop: 145.9,
                beta: 500,
                dim: 1402,
                drop: false,
                inst: 0,
            },
            CostEstimate {
                model: "Core‑Enum + O(1)",
                rop: 568.2,
                beta: 500,
                dim: 1402,
                drop: false,
                inst: 0,
            },
        ],
    },
    AttackEstimate {
        scheme: SchemeInfo {
            name: "Saber",
            assumption: "MLWR",
            primitive: "KEM",
        },
        params: SABER_PARAMS,
        attack: AttackKind::Primal,
        costs: &[
            CostEstimate {
                model: "Q‑Core‑Sieve",
                rop: 185.8,
                beta: 701,
                dim: 1498,
                drop: false,
                inst: 0,
            },
            CostEstimate {
                model: "Core‑Sieve",
                rop: 204.7,
                beta: 701,
                dim: 1498,
                drop: false,
                inst: 0,
            },
        ],
    },
    AttackEstimate {
        scheme: SchemeInfo {
            name: "Lizard",
            assumption: "LWE",
            primitive: "PKE",
        },
        params: LIZARD_PARAMS,
        attack: AttackKind::Dual,
        costs: &[
            CostEstimate {
                model: "Q‑Core‑Sieve",
                rop: 217.1,
                beta: 819,
                dim: 1725,
                drop: true,
                inst: 0,
            },
            CostEstimate {
                model: "Core‑Sieve",
                rop: 239.3,
                beta: 819,
                dim: 1725,
                drop: true,
                inst: 0,
            },
        ],
    },
];
