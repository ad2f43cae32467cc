// ─────────────────────────────────────────────────────────────────────
// SCPN Ellint — Segments
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Piecewise rational segment tables for K(m) and E(m).
//!
//! Coefficients are the minimax fits of Fukushima, "Precise and fast
//! computation of complete elliptic integrals by piecewise minimax rational
//! function approximation", J. Comput. Appl. Math. 282 (2015) 71-76,
//! doi:10.1016/j.cam.2014.12.038.
//!
//! Every fit is expressed in the complementary parameter mc = 1 - m. Each
//! segment maps its mc-interval affinely onto [0, 1] and evaluates
//! a degree-5 numerator over a monic degree-5 denominator. The last interval
//! before mc = 0 is handled by the logarithmic branches at the bottom of
//! this file.
//!
//! The literals and the Horner order are part of the approximation: the fits
//! were tuned against exactly this evaluation path, so neither may be
//! rewritten into an algebraically equivalent form.

use ellint_types::constants::ONE_SIXTEENTH;

/// One fitted piece of a rational approximation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// The segment applies for mc strictly greater than this bound.
    pub mc_lower_bound: f64,
    pub scale: f64,
    pub shift: f64,
    /// P(t), constant term first.
    pub numerator: [f64; 6],
    /// Q(t) without its leading coefficient of 1, constant term first.
    pub denominator: [f64; 5],
}

impl Segment {
    /// t = scale * mc - shift.
    #[inline]
    pub fn normalize(&self, mc: f64) -> f64 {
        self.scale * mc - self.shift
    }

    /// P(t) / Q(t) at t = `normalize(mc)`.
    #[inline]
    pub fn eval(&self, mc: f64) -> f64 {
        let t = self.normalize(mc);
        horner(&self.numerator, t) / horner_monic(&self.denominator, t)
    }
}

/// c[0] + t*(c[1] + t*(... + t*c[n-1])).
#[inline]
fn horner(coeffs: &[f64], t: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * t + c)
}

/// Same as [`horner`] with an implicit leading coefficient of 1.
#[inline]
fn horner_monic(coeffs: &[f64], t: f64) -> f64 {
    coeffs.iter().rev().fold(1.0, |acc, &c| acc * t + c)
}

/// First segment, scanning from the largest bound down, with
/// `mc > mc_lower_bound`. `None` means mc lies at or below the last bound.
#[inline]
pub fn select(table: &[Segment], mc: f64) -> Option<&Segment> {
    table.iter().find(|segment| mc > segment.mc_lower_bound)
}

/// Lower mc bound of the K table; below it [`k_near_one`] applies.
pub const K_SINGULAR_BOUND: f64 = 0.008213;

/// Lower mc bound of the E table; below it [`e_near_one`] applies.
pub const E_SINGULAR_BOUND: f64 = 0.004841;

pub const K_SEGMENTS: [Segment; 9] = [
    Segment {
        mc_lower_bound: 0.592990,
        scale: 2.45694208987494165,
        shift: 1.45694208987494165,
        numerator: [
            3703.75266375099019,
            5462.47093231923466,
            2744.82029097576810,
            543.839017382099411,
            36.2381612593459565,
            0.393188651542789784,
        ],
        denominator: [
            2077.94377067058435,
            3398.00069767755460,
            1959.05960044399275,
            472.794455487539279,
            43.5464368440078942,
        ],
    },
    Segment {
        mc_lower_bound: 0.350756,
        scale: 4.12823963605439369,
        shift: 1.44800482178389491,
        numerator: [
            4264.28203103974630,
            6341.90978213264024,
            3214.59187442783167,
            642.790566685354573,
            43.2589626155454993,
            0.475223892294445943,
        ],
        denominator: [
            2125.06914237062279,
            3479.95663350926514,
            2006.03187933518870,
            482.900172581418890,
            44.1848041560412224,
        ],
    },
    Segment {
        mc_lower_bound: 0.206924,
        scale: 6.95255575949719117,
        shift: 1.43865064797819679,
        numerator: [
            4870.25402224986382,
            7307.18826377416591,
            3738.29369283392307,
            754.928587580583704,
            51.3609902253065926,
            0.571948962277566451,
        ],
        denominator: [
            2172.51745704102287,
            3565.04737778032566,
            2056.13612019430497,
            493.962405117599400,
            44.9026847057686146,
        ],
    },
    Segment {
        mc_lower_bound: 0.121734,
        scale: 11.7384669562155183,
        shift: 1.42897053644793990,
        numerator: [
            5514.8512729127464,
            8350.4595896779631,
            4313.60788246750934,
            880.27903031894216,
            60.598720224393536,
            0.68504458747933773,
        ],
        denominator: [
            2218.41682813309737,
            3650.41829123846319,
            2107.97379949034285,
            505.74295207655096,
            45.6911096775045314,
        ],
    },
    Segment {
        mc_lower_bound: 0.071412,
        scale: 19.8720241643813839,
        shift: 1.41910098962680339,
        numerator: [
            6188.8743957372448,
            9459.3331440432847,
            4935.41351498551527,
            1018.21910476032105,
            70.981049144472361,
            0.81599895108245948,
        ],
        denominator: [
            2260.73112539748448,
            3732.66955095581621,
            2159.68721749761492,
            517.86964191812384,
            46.5298955058476510,
        ],
    },
    Segment {
        mc_lower_bound: 0.041770,
        scale: 33.7359152553808785,
        shift: 1.40914918021725929,
        numerator: [
            6879.5170681289562,
            10615.0836403687221,
            5594.8381504799829,
            1167.26108955935542,
            82.452856129147838,
            0.96592719058503951,
        ],
        denominator: [
            2296.88303450660439,
            3807.37745652028212,
            2208.74949754945558,
            529.79651353072921,
            47.3844470709989137,
        ],
    },
    Segment {
        mc_lower_bound: 0.024360,
        scale: 57.4382538770821367,
        shift: 1.39919586444572085,
        numerator: [
            7570.6827538712100,
            11792.9392624454532,
            6279.2661370014890,
            1325.01058966228180,
            94.886883830605940,
            1.13537029594409690,
        ],
        denominator: [
            2324.04824540459984,
            3869.56755306385732,
            2252.22250562615338,
            540.85752251676412,
            48.2089280211559345,
        ],
    },
    Segment {
        mc_lower_bound: 0.014165,
        scale: 98.0872976949485042,
        shift: 1.38940657184894556,
        numerator: [
            8247.2601660137746,
            12967.7060124572914,
            6974.7495213178613,
            1488.54008220335966,
            108.098282908839979,
            1.32411616748380686,
        ],
        denominator: [
            2340.47337508405427,
            3915.63324533769906,
            2287.70677154700516,
            550.45072377717361,
            48.9575432570382154,
        ],
    },
    Segment {
        mc_lower_bound: K_SINGULAR_BOUND,
        scale: 168.010752688172043,
        shift: 1.37987231182795699,
        numerator: [
            8894.2961573611293,
            14113.7038749808951,
            7666.5611739483371,
            1654.60731579994159,
            121.863474964652041,
            1.53112170837206117,
        ],
        denominator: [
            2344.88618943372377,
            3942.81065054556536,
            2313.28396270968662,
            558.07615380622169,
            49.5906602613891184,
        ],
    },
];

pub const E_SEGMENTS: [Segment; 8] = [
    Segment {
        mc_lower_bound: 0.566638,
        scale: 2.30753965506897236,
        shift: 1.30753965506897236,
        numerator: [
            19702.2363352671642,
            31904.1559574281609,
            18177.1879313824040,
            4362.94760768571862,
            409.975559128654710,
            10.3244775335024885,
        ],
        denominator: [
            14241.2135819448616,
            20909.9899599927367,
            10266.4884503526076,
            1934.86289070792954,
            117.162100771599098,
        ],
    },
    Segment {
        mc_lower_bound: 0.315153,
        scale: 3.97638030101198879,
        shift: 1.25316818100483130,
        numerator: [
            16317.0721393008221,
            26627.8852140835023,
            15129.4009798463159,
            3574.15857605556033,
            326.113727011739428,
            7.93163724081373477,
        ],
        denominator: [
            13047.1505096551210,
            19753.5762165922376,
            9964.25173735060361,
            1918.72232033637537,
            117.670514069579649,
        ],
    },
    Segment {
        mc_lower_bound: 0.171355,
        scale: 6.95419964116329852,
        shift: 1.19163687951153702,
        numerator: [
            13577.3850240991520,
            22545.4744699553993,
            12871.9137872656293,
            3000.74575264868572,
            263.964361648520708,
            6.08522443139677663,
        ],
        denominator: [
            11717.3306408059832,
            18431.1264424290258,
            9619.40382323874064,
            1904.06010727307491,
            118.690522739531267,
        ],
    },
    Segment {
        mc_lower_bound: 0.090670,
        scale: 12.3938774245522712,
        shift: 1.12375286608415443,
        numerator: [
            11307.9485341543712,
            19328.6173704569489,
            11208.6068472959372,
            2596.54874477084334,
            219.253495956962613,
            4.66931143174036616,
        ],
        denominator: [
            10307.6837501971393,
            16982.2450249024383,
            9241.7604666150102,
            1893.41905403040679,
            120.498555754227847,
        ],
    },
    Segment {
        mc_lower_bound: 0.046453,
        scale: 22.6157360291290680,
        shift: 1.05056878576113260,
        numerator: [
            9383.1490856819874,
            16718.9730458676860,
            9977.2498973537718,
            2323.49987246555537,
            188.618148076418837,
            3.59313532204509922,
        ],
        denominator: [
            8877.1964704758383,
            15450.0537230364062,
            8840.2771293410661,
            1889.13672102820913,
            123.422125687316355,
        ],
    },
    Segment {
        mc_lower_bound: 0.022912,
        scale: 42.4790790535661187,
        shift: 0.973280659275306911,
        numerator: [
            7719.1171817802054,
            14521.7363804934985,
            9045.3996063894006,
            2149.92068078627829,
            169.386557799782496,
            2.78515570453129137,
        ],
        denominator: [
            7479.7539074698012,
            13874.4978011497847,
            8420.3848818926324,
            1892.69753150329759,
            127.802109608726363,
        ],
    },
    Segment {
        mc_lower_bound: 0.010809,
        scale: 82.6241427745187144,
        shift: 0.893084359249772784,
        numerator: [
            6261.6095608987273,
            12593.0874916293982,
            8304.3265605809870,
            2048.68391263416822,
            159.371262600702237,
            2.18867046462858104,
        ],
        denominator: [
            6156.4532048239501,
            12283.8373999680518,
            7979.7435857665227,
            1903.60556312663537,
            133.911640385965187,
        ],
    },
    Segment {
        mc_lower_bound: E_SINGULAR_BOUND,
        scale: 167.560321715817694,
        shift: 0.811159517426273458,
        numerator: [
            4978.06146583586728,
            10831.7178150656694,
            7664.6703673290453,
            1995.66437151562090,
            156.689647694892782,
            1.75859085945198570,
        ],
        denominator: [
            4935.56743322938333,
            10694.5510113880077,
            7506.8028283118051,
            1918.38517009740321,
            141.854303920116856,
        ],
    },
];

/// K for 0 < mc <= [`K_SINGULAR_BOUND`]:
/// K = -ln(mc/16) A(t) - mc B(t) with t = 1 - 121.758188238159016 mc.
#[inline]
pub fn k_near_one(mc: f64) -> f64 {
    let t = 1.0 - 121.758188238159016 * mc;
    let p = -(mc * ONE_SIXTEENTH).ln()
        * (34813.4518336350547 + t * (235.767716637974271 + t * 0.199792723884069485))
        / (69483.5736412906324 + t * (614.265044703187382 + t));
    let q = -mc
        * (9382.53386835986099 + t * (51.6478985993381223 + t * 0.00410754154682816898))
        / (37327.7262507318317 + t * (408.017247271148538 + t));
    p + q
}

/// E for 0 < mc <= [`E_SINGULAR_BOUND`]:
/// E = -mc ln(mc/16) A(t) + C(t) with t = 1 - 206.568890725056806 mc.
#[inline]
pub fn e_near_one(mc: f64) -> f64 {
    let t = 1.0 - 206.568890725056806 * mc;
    let p = -mc
        * (mc * ONE_SIXTEENTH).ln()
        * (41566.6612602868736 + t * (154.034981522913482 + t * 0.0618072471798575991))
        / (165964.442527585615 + t * (917.589668642251803 + t));
    let q = (132232.803956682877 + t * (353.375480007017643 - t * 1.40105837312528026))
        / (132393.665743088043 + t * (192.112635228732532 - t));
    p + q
}
