/// One NSC examination sitting and the page listing its papers.
#[derive(Debug, Clone, Copy)]
pub struct ExamPeriod {
    pub key: &'static str,
    pub url: &'static str,
    pub year: i32,
    pub period: &'static str,
}

/// All known exam-paper pages on education.gov.za, newest first.
/// Catalog order follows this declaration order.
const EXAM_PERIODS: &[ExamPeriod] = &[
    ExamPeriod {
        key: "2025_may_june",
        url: "https://www.education.gov.za/Curriculum/NationalSeniorCertificate(NSC)Examinations/NSCPastExaminationpapers/2025MayJuneNSCSCExaminationPapers.aspx",
        year: 2025,
        period: "May/June",
    },
    ExamPeriod {
        key: "2024_november",
        url: "https://www.education.gov.za/Curriculum/NationalSeniorCertificate(NSC)Examinations/NSCPastExaminationpapers/2024NovemberNSCExaminationPapers.aspx",
        year: 2024,
        period: "November",
    },
    ExamPeriod {
        key: "2024_may_june",
        url: "https://www.education.gov.za/Curriculum/NationalSeniorCertificate(NSC)Examinations/NSCPastExaminationpapers/2024MayJuneNSCSCExamPapers.aspx",
        year: 2024,
        period: "May/June",
    },
    ExamPeriod {
        key: "2023_november",
        url: "https://www.education.gov.za/Curriculum/NationalSeniorCertificate(NSC)Examinations/NSCPastExaminationpapers/2023NSCNovemberExampapers.aspx",
        year: 2023,
        period: "November",
    },
    ExamPeriod {
        key: "2023_may_june",
        url: "https://www.education.gov.za/Curriculum/NationalSeniorCertificate(NSC)Examinations/NSCPastExaminationpapers/2023MayJuneNSCSCExamPapers.aspx",
        year: 2023,
        period: "May/June",
    },
    ExamPeriod {
        key: "2022_november",
        url: "https://www.education.gov.za/Curriculum/NationalSeniorCertificate(NSC)Examinations/NSCPastExaminationpapers/2022NSCNovemberExaminationPapers.aspx",
        year: 2022,
        period: "November",
    },
    ExamPeriod {
        key: "2022_may_june",
        url: "https://www.education.gov.za/Curriculum/NationalSeniorCertificate(NSC)Examinations/NSCPastExaminationpapers/2022MayJuneNSCSCExamPapers.aspx",
        year: 2022,
        period: "May/June",
    },
    ExamPeriod {
        key: "2021_november",
        url: "https://www.education.gov.za/Curriculum/NationalSeniorCertificate(NSC)Examinations/NSCPastExaminationpapers/2021NSCNovemberExaminationPapers.aspx",
        year: 2021,
        period: "November",
    },
    ExamPeriod {
        key: "2021_may_june",
        url: "https://www.education.gov.za/Curriculum/NationalSeniorCertificate(NSC)Examinations/NSCPastExaminationpapers/2021NSCSCMayJuneExaminations.aspx",
        year: 2021,
        period: "May/June",
    },
    ExamPeriod {
        key: "2020_november",
        url: "https://www.education.gov.za/Curriculum/NationalSeniorCertificate(NSC)Examinations/NSCPastExaminationpapers/2020NSCandSCExamPapers(November).aspx",
        year: 2020,
        period: "November",
    },
];

pub fn exam_periods() -> &'static [ExamPeriod] {
    EXAM_PERIODS
}

// ── Tests ──
