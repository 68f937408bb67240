//! Fixed statement catalogue
//!
//! Statements are single-line; the sync engine relies on that when it turns
//! them into SCAT bullet lines.

use crate::category::Category;

/// Sentinel offered in every category; its detail lives in a free-text field
pub const OTHER: &str = "อื่นๆ (Other)";

const PERSONAL_FACTORS: &[&str] = &[
    "ขับรถเร็วเกินกำหนด (Speeding)",
    "อ่อนเพลีย/ง่วงนอน (Fatigue or drowsiness)",
    "ขาดความระมัดระวัง (Inattention)",
    "ใช้โทรศัพท์ขณะขับขี่ (Phone use while driving)",
    "ขาดประสบการณ์ในเส้นทาง (Unfamiliar with route)",
    "ไม่ปฏิบัติตามขั้นตอน (Procedure not followed)",
    "สุขภาพไม่พร้อม (Unfit to drive)",
    OTHER,
];

const ROUTE_HAZARDOUS: &[&str] = &[
    "ทางโค้งอันตราย (Sharp curve)",
    "ทางลาดชัน (Steep grade)",
    "ถนนชำรุด/เป็นหลุม (Damaged road surface)",
    "ทางแคบ (Narrow road)",
    "จุดตัดทางรถไฟ (Railway crossing)",
    "เขตก่อสร้าง (Road works)",
    OTHER,
];

const TRUCK_CONDITION: &[&str] = &[
    "ระบบเบรกบกพร่อง (Brake defect)",
    "ยางสึก/ยางระเบิด (Worn or burst tyre)",
    "ไฟส่องสว่างชำรุด (Lighting failure)",
    "ระบบบังคับเลี้ยวผิดปกติ (Steering fault)",
    "บรรทุกเกินพิกัด (Overloaded)",
    "การยึดสินค้าไม่มั่นคง (Load not secured)",
    OTHER,
];

const ENVIRONMENT: &[&str] = &[
    "ฝนตก/ถนนลื่น (Rain or slippery road)",
    "หมอกควัน/ทัศนวิสัยต่ำ (Fog or low visibility)",
    "แสงสว่างไม่เพียงพอ (Poor lighting at night)",
    "สัตว์ตัดหน้า (Animal on road)",
    "การจราจรหนาแน่น (Heavy traffic)",
    "ผู้ใช้ถนนรายอื่น (Other road user)",
    OTHER,
];

const COMPANY_POLICY: &[&str] = &[
    "ไม่มีนโยบายการพักผ่อน (No rest-break policy)",
    "การอบรมไม่เพียงพอ (Insufficient training)",
    "ตารางงานเร่งรีบ (Unrealistic schedule)",
    "ไม่มีการตรวจสภาพรถก่อนใช้งาน (No pre-trip inspection)",
    "ไม่มีการประเมินความเสี่ยงเส้นทาง (No route risk assessment)",
    "การบำรุงรักษาไม่เป็นไปตามแผน (Maintenance plan not followed)",
    OTHER,
];

/// Statements offered for `category`, in display order
#[must_use]
pub fn catalogue(category: Category) -> &'static [&'static str] {
    match category {
        Category::PersonalFactors => PERSONAL_FACTORS,
        Category::RouteHazardous => ROUTE_HAZARDOUS,
        Category::TruckCondition => TRUCK_CONDITION,
        Category::Environment => ENVIRONMENT,
        Category::CompanyPolicy => COMPANY_POLICY,
    }
}

/// Position of `statement` in the category's display order
#[must_use]
pub fn catalogue_position(category: Category, statement: &str) -> Option<usize> {
    catalogue(category).iter().position(|item| *item == statement)
}

/// Check if `statement` is offered under `category`
#[inline]
#[must_use]
pub fn is_catalogued(category: Category, statement: &str) -> bool {
    catalogue_position(category, statement).is_some()
}
