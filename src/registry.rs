//! Catalog of standardized curves.
//!
//! Constants are the big-endian values from SEC 2 v2 (<http://www.secg.org/sec2-v2.pdf>)
//! and RFC 5639 (<https://tools.ietf.org/html/rfc5639>).

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use tracing::trace;

use crate::curve::CurveParameters;
use crate::error::CurveError;

/// Standards body that published a curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Sec2,
    Brainpool,
}

/// Identifier of a curve in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CurveId {
    Secp224r1,
    Secp256r1,
    Secp384r1,
    Secp521r1,
    BrainpoolP160r1,
    BrainpoolP192r1,
    BrainpoolP224r1,
    BrainpoolP256r1,
    BrainpoolP320r1,
    BrainpoolP384r1,
    BrainpoolP512r1,
}

struct Entry {
    id: CurveId,
    name: &'static str,
    oid: &'static str,
    family: Family,
    aliases: &'static [&'static str],
    p: &'static str,
    a: &'static str,
    b: &'static str,
}

// Indexed by `CurveId as usize`.
static TABLE: [Entry; 11] = [
    Entry {
        id: CurveId::Secp224r1,
        name: "secp224r1",
        oid: "1.3.132.0.33",
        family: Family::Sec2,
        aliases: &["P-224", "nistp224"],
        p: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000001",
        a: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFFFFFFFFFFFFFFFFFE",
        b: "B4050A850C04B3ABF54132565044B0B7D7BFD8BA270B39432355FFB4",
    },
    Entry {
        id: CurveId::Secp256r1,
        name: "secp256r1",
        oid: "1.2.840.10045.3.1.7",
        family: Family::Sec2,
        aliases: &["P-256", "prime256v1", "nistp256"],
        p: "FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFF",
        a: "FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFC",
        b: "5AC635D8AA3A93E7B3EBBD55769886BC651D06B0CC53B0F63BCE3C3E27D2604B",
    },
    Entry {
        id: CurveId::Secp384r1,
        name: "secp384r1",
        oid: "1.3.132.0.34",
        family: Family::Sec2,
        aliases: &["P-384", "nistp384"],
        p: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFF0000000000000000FFFFFFFF",
        a: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFF0000000000000000FFFFFFFC",
        b: "B3312FA7E23EE7E4988E056BE3F82D19181D9C6EFE8141120314088F5013875AC656398D8A2ED19D2A85C8EDD3EC2AEF",
    },
    Entry {
        id: CurveId::Secp521r1,
        name: "secp521r1",
        oid: "1.3.132.0.35",
        family: Family::Sec2,
        aliases: &["P-521", "nistp521"],
        p: "01FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF",
        a: "01FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFC",
        b: "0051953EB9618E1C9A1F929A21A0B68540EEA2DA725B99B315F3B8B489918EF109E156193951EC7E937B1652C0BD3BB1BF073573DF883D2C34F1EF451FD46B503F00",
    },
    Entry {
        id: CurveId::BrainpoolP160r1,
        name: "brainpoolP160r1",
        oid: "1.3.36.3.3.2.8.1.1.1",
        family: Family::Brainpool,
        aliases: &[],
        p: "E95E4A5F737059DC60DFC7AD95B3D8139515620F",
        a: "340E7BE2A280EB74E2BE61BADA745D97E8F7C300",
        b: "1E589A8595423412134FAA2DBDEC95C8D8675E58",
    },
    Entry {
        id: CurveId::BrainpoolP192r1,
        name: "brainpoolP192r1",
        oid: "1.3.36.3.3.2.8.1.1.3",
        family: Family::Brainpool,
        aliases: &[],
        p: "C302F41D932A36CDA7A3463093D18DB78FCE476DE1A86297",
        a: "6A91174076B1E0E19C39C031FE8685C1CAE040E5C69A28EF",
        b: "469A28EF7C28CCA3DC721D044F4496BCCA7EF4146FBF25C9",
    },
    Entry {
        id: CurveId::BrainpoolP224r1,
        name: "brainpoolP224r1",
        oid: "1.3.36.3.3.2.8.1.1.5",
        family: Family::Brainpool,
        aliases: &[],
        p: "D7C134AA264366862A18302575D1D787B09F075797DA89F57EC8C0FF",
        a: "68A5E62CA9CE6C1C299803A6C1530B514E182AD8B0042A59CAD29F43",
        b: "2580F63CCFE44138870713B1A92369E33E2135D266DBB372386C400B",
    },
    Entry {
        id: CurveId::BrainpoolP256r1,
        name: "brainpoolP256r1",
        oid: "1.3.36.3.3.2.8.1.1.7",
        family: Family::Brainpool,
        aliases: &[],
        p: "A9FB57DBA1EEA9BC3E660A909D838D726E3BF623D52620282013481D1F6E5377",
        a: "7D5A0975FC2C3057EEF67530417AFFE7FB8055C126DC5C6CE94A4B44F330B5D9",
        b: "26DC5C6CE94A4B44F330B5D9BBD77CBF958416295CF7E1CE6BCCDC18FF8C07B6",
    },
    Entry {
        id: CurveId::BrainpoolP320r1,
        name: "brainpoolP320r1",
        oid: "1.3.36.3.3.2.8.1.1.9",
        family: Family::Brainpool,
        aliases: &[],
        p: "D35E472036BC4FB7E13C785ED201E065F98FCFA6F6F40DEF4F92B9EC7893EC28FCD412B1F1B32E27",
        a: "3EE30B568FBAB0F883CCEBD46D3F3BB8A2A73513F5EB79DA66190EB085FFA9F492F375A97D860EB4",
        b: "520883949DFDBC42D3AD198640688A6FE13F41349554B49ACC31DCCD884539816F5EB4AC8FB1F1A6",
    },
    Entry {
        id: CurveId::BrainpoolP384r1,
        name: "brainpoolP384r1",
        oid: "1.3.36.3.3.2.8.1.1.11",
        family: Family::Brainpool,
        aliases: &[],
        p: "8CB91E82A3386D280F5D6F7E50E641DF152F7109ED5456B412B1DA197FB71123ACD3A729901D1A71874700133107EC53",
        a: "7BC382C63D8C150C3C72080ACE05AFA0C2BEA28E4FB22787139165EFBA91F90F8AA5814A503AD4EB04A8C7DD22CE2826",
        b: "04A8C7DD22CE28268B39B55416F0447C2FB77DE107DCD2A62E880EA53EEB62D57CB4390295DBC9943AB78696FA504C11",
    },
    Entry {
        id: CurveId::BrainpoolP512r1,
        name: "brainpoolP512r1",
        oid: "1.3.36.3.3.2.8.1.1.13",
        family: Family::Brainpool,
        aliases: &[],
        p: "AADD9DB8DBE9C48B3FD4E6AE33C9FC07CB308DB3B3C9D20ED6639CCA703308717D4D9B009BC66842AECDA12AE6A380E62881FF2F2D82C68528AA6056583A48F3",
        a: "7830A3318B603B89E2327145AC234CC594CBDD8D3DF91610A83441CAEA9863BC2DED5D5AA8253AA10A2EF1C98B9AC8B57F1117A72BF2C7B9E7C1AC4D77FC94CA",
        b: "3DF91610A83441CAEA9863BC2DED5D5AA8253AA10A2EF1C98B9AC8B57F1117A72BF2C7B9E7C1AC4D77FC94CADC083E67984050B75EBAE5DD2809BD638016F723",
    },
];

lazy_static! {
    static ref CATALOG: Vec<CurveParameters> = TABLE
        .iter()
        .map(|entry| {
            CurveParameters::from_hex(entry.a, entry.b, entry.p, entry.name)
                .expect("catalog constants are valid hex")
        })
        .collect();
}

impl CurveId {
    pub const ALL: [CurveId; 11] = [
        CurveId::Secp224r1,
        CurveId::Secp256r1,
        CurveId::Secp384r1,
        CurveId::Secp521r1,
        CurveId::BrainpoolP160r1,
        CurveId::BrainpoolP192r1,
        CurveId::BrainpoolP224r1,
        CurveId::BrainpoolP256r1,
        CurveId::BrainpoolP320r1,
        CurveId::BrainpoolP384r1,
        CurveId::BrainpoolP512r1,
    ];

    fn entry(self) -> &'static Entry {
        &TABLE[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.entry().name
    }

    /// Dotted ASN.1 object identifier.
    pub fn oid(self) -> &'static str {
        self.entry().oid
    }

    pub fn family(self) -> Family {
        self.entry().family
    }

    pub fn parameters(self) -> &'static CurveParameters {
        &CATALOG[self as usize]
    }
}

impl fmt::Display for CurveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CurveId {
    type Err = CurveError;

    /// Matches canonical names and aliases, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let found = TABLE.iter().find(|entry| {
            entry.name.eq_ignore_ascii_case(s)
                || entry.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(s))
        });
        trace!(name = s, found = ?found.map(|entry| entry.id), "curve lookup");
        found
            .map(|entry| entry.id)
            .ok_or_else(|| CurveError::UnknownCurve(s.to_string()))
    }
}

/// All catalog entries in table order.
pub fn catalog() -> impl Iterator<Item = &'static CurveParameters> {
    CATALOG.iter()
}

impl CurveParameters {
    pub fn standard(id: CurveId) -> Self {
        id.parameters().clone()
    }

    pub fn by_name(name: &str) -> Result<Self, CurveError> {
        name.parse().map(Self::standard)
    }

    /// The catalog entry with the same `(a, b, p)`, whatever `self` is named.
    pub fn identify(&self) -> Option<CurveId> {
        CurveId::ALL
            .iter()
            .copied()
            .find(|id| id.parameters() == self)
    }

    pub fn secp224r1() -> Self {
        Self::standard(CurveId::Secp224r1)
    }

    pub fn secp256r1() -> Self {
        Self::standard(CurveId::Secp256r1)
    }

    pub fn secp384r1() -> Self {
        Self::standard(CurveId::Secp384r1)
    }

    pub fn secp521r1() -> Self {
        Self::standard(CurveId::Secp521r1)
    }

    pub fn brainpool_p160r1() -> Self {
        Self::standard(CurveId::BrainpoolP160r1)
    }

    pub fn brainpool_p192r1() -> Self {
        Self::standard(CurveId::BrainpoolP192r1)
    }

    pub fn brainpool_p224r1() -> Self {
        Self::standard(CurveId::BrainpoolP224r1)
    }

    pub fn brainpool_p256r1() -> Self {
        Self::standard(CurveId::BrainpoolP256r1)
    }

    pub fn brainpool_p320r1() -> Self {
        Self::standard(CurveId::BrainpoolP320r1)
    }

    pub fn brainpool_p384r1() -> Self {
        Self::standard(CurveId::BrainpoolP384r1)
    }

    pub fn brainpool_p512r1() -> Self {
        Self::standard(CurveId::BrainpoolP512r1)
    }
}
