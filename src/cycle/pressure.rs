/// 사이클의 다섯 압력 단계. 단위는 bar(abs).
///
/// 추기 압력 p2 > p3 > p4는 보일러 압력 p1과 복수기 압력 p5 사이를 4등분해 정한다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressureLevels {
    pub p1: f64,
    pub p2: f64,
    pub p3: f64,
    pub p4: f64,
    pub p5: f64,
}

/// 토폴로지에서 압력 단계를 가리키는 이름.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressureLevel {
    /// 보일러(p1)
    Boiler,
    /// 고압 추기(p2)
    High,
    /// 중압 추기(p3)
    Intermediate,
    /// 저압 추기(p4)
    Low,
    /// 복수기(p5)
    Condenser,
}

impl PressureLevels {
    /// 보일러 압력과 복수기 압력 사이를 같은 간격으로 나눈다.
    /// `p1 > p5`가 아니면 물리적으로 의미 없는 값이 나온다(검증은 설정 단계에서 한다).
    pub fn from_bounds(p1: f64, p5: f64) -> Self {
        let step = (p1 - p5) / 4.0;
        let p4 = p5 + step;
        let p3 = p4 + step;
        let p2 = p3 + step;
        Self { p1, p2, p3, p4, p5 }
    }

    pub fn get(&self, level: PressureLevel) -> f64 {
        match level {
            PressureLevel::Boiler => self.p1,
            PressureLevel::High => self.p2,
            PressureLevel::Intermediate => self.p3,
            PressureLevel::Low => self.p4,
            PressureLevel::Condenser => self.p5,
        }
    }

    /// 높은 압력부터 [p1, p2, p3, p4, p5] 순서.
    pub fn as_array(&self) -> [f64; 5] {
        [self.p1, self.p2, self.p3, self.p4, self.p5]
    }
}
