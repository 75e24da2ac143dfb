/// 상태점이 어떤 과정으로 고정되었는지 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateKind {
    /// 보일러 출구 과열 증기
    BoilerOutlet,
    /// 터빈 팽창 출구
    Expansion,
    /// 재열기 출구
    Reheat,
    /// 포화수(x = 0)
    SaturatedLiquid,
    /// 펌프 출구
    PumpOutlet,
    /// 트랩(교축) 출구
    TrapOutlet,
}

/// 하나의 열역학 상태점. 생성 후에는 변경하지 않는다.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    /// 1부터 시작하는 상태 번호(출력 열 h1, h2, ...와 같다)
    pub index: usize,
    pub kind: StateKind,
    /// 압력(bar abs)
    pub pressure_bar: f64,
    /// 온도(K). 트랩·펌프 출구는 계산하지 않는다.
    pub temperature_k: Option<f64>,
    /// 비엔탈피(kJ/kg)
    pub enthalpy_kj_per_kg: f64,
    /// 엔트로피(kJ/kg·K)
    pub entropy_kj_per_kgk: Option<f64>,
    /// 비체적(m³/kg)
    pub specific_volume: Option<f64>,
}

/// 한 스윕 점에서 만들어진 상태점의 순서열.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateChain {
    states: Vec<State>,
}

impl StateChain {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            states: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, state: State) {
        self.states.push(state);
    }

    /// 상태 번호(1부터)로 조회한다.
    pub fn get(&self, index: usize) -> Option<&State> {
        index.checked_sub(1).and_then(|i| self.states.get(i))
    }

    /// 상태 번호의 비엔탈피. 번호는 토폴로지가 만든 것만 넣는다.
    pub fn h(&self, index: usize) -> f64 {
        self.states[index - 1].enthalpy_kj_per_kg
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &State> {
        self.states.iter()
    }

    /// h1, h2, ... 순서의 비엔탈피 목록.
    pub fn enthalpies(&self) -> Vec<f64> {
        self.states.iter().map(|s| s.enthalpy_kj_per_kg).collect()
    }
}
