//! English labels.
//!
//! Region names are apostrophe-free pinyin with the GB/T 2260 suffix words
//! kept as-is (Sheng, Shi, Qu, Xian). The key set matches the zh-cn table
//! entry for entry.

use super::LocaleData;

pub(crate) static EN_US: LocaleData = LocaleData {
    regions: &[
        ("110000", "Beijing Shi"),
        ("110100", "Shixiaqu"),
        ("110101", "Dongcheng Qu"),
        ("110102", "Xicheng Qu"),
        ("110105", "Chaoyang Qu"),
        ("110106", "Fengtai Qu"),
        ("110107", "Shijingshan Qu"),
        ("110108", "Haidian Qu"),
        ("110112", "Tongzhou Qu"),
        ("110114", "Changping Qu"),
        ("120000", "Tianjin Shi"),
        ("120100", "Shixiaqu"),
        ("120101", "Heping Qu"),
        ("120102", "Hedong Qu"),
        ("120103", "Hexi Qu"),
        ("120104", "Nankai Qu"),
        ("120110", "Dongli Qu"),
        ("130000", "Hebei Sheng"),
        ("130100", "Shijiazhuang Shi"),
        ("130102", "Changan Qu"),
        ("130104", "Qiaoxi Qu"),
        ("130200", "Tangshan Shi"),
        ("130300", "Qinhuangdao Shi"),
        ("130600", "Baoding Shi"),
        ("140000", "Shanxi Sheng"),
        ("140100", "Taiyuan Shi"),
        ("140105", "Xiaodian Qu"),
        ("140200", "Datong Shi"),
        ("150000", "Nei Mongol Zizhiqu"),
        ("150100", "Hohhot Shi"),
        ("150200", "Baotou Shi"),
        ("210000", "Liaoning Sheng"),
        ("210100", "Shenyang Shi"),
        ("210102", "Heping Qu"),
        ("210103", "Shenhe Qu"),
        ("210200", "Dalian Shi"),
        ("210202", "Zhongshan Qu"),
        ("210204", "Shahekou Qu"),
        ("220000", "Jilin Sheng"),
        ("220100", "Changchun Shi"),
        ("220200", "Jilin Shi"),
        ("230000", "Heilongjiang Sheng"),
        ("230100", "Harbin Shi"),
        ("230102", "Daoli Qu"),
        ("230103", "Nangang Qu"),
        ("230600", "Daqing Shi"),
        ("310000", "Shanghai Shi"),
        ("310100", "Shixiaqu"),
        ("310101", "Huangpu Qu"),
        ("310104", "Xuhui Qu"),
        ("310105", "Changning Qu"),
        ("310107", "Putuo Qu"),
        ("310110", "Yangpu Qu"),
        ("310112", "Minhang Qu"),
        ("310115", "Pudong Xinqu"),
        ("320000", "Jiangsu Sheng"),
        ("320100", "Nanjing Shi"),
        ("320102", "Xuanwu Qu"),
        ("320104", "Qinhuai Qu"),
        ("320106", "Gulou Qu"),
        ("320111", "Pukou Qu"),
        ("320115", "Jiangning Qu"),
        ("320200", "Wuxi Shi"),
        ("320500", "Suzhou Shi"),
        ("320502", "Huqiu Qu"),
        ("320505", "Wuzhong Qu"),
        ("330000", "Zhejiang Sheng"),
        ("330100", "Hangzhou Shi"),
        ("330102", "Shangcheng Qu"),
        ("330105", "Gongshu Qu"),
        ("330106", "Xihu Qu"),
        ("330108", "Binjiang Qu"),
        ("330109", "Xiaoshan Qu"),
        ("330110", "Yuhang Qu"),
        ("330200", "Ningbo Shi"),
        ("330203", "Haishu Qu"),
        ("330300", "Wenzhou Shi"),
        ("340000", "Anhui Sheng"),
        ("340100", "Hefei Shi"),
        ("340111", "Baohe Qu"),
        ("340200", "Wuhu Shi"),
        ("350000", "Fujian Sheng"),
        ("350100", "Fuzhou Shi"),
        ("350102", "Gulou Qu"),
        ("350103", "Taijiang Qu"),
        ("350104", "Cangshan Qu"),
        ("350105", "Mawei Qu"),
        ("350111", "Jinan Qu"),
        ("350112", "Changle Qu"),
        ("350121", "Minhou Xian"),
        ("350181", "Fuqing Shi"),
        ("350200", "Xiamen Shi"),
        ("350203", "Siming Qu"),
        ("350205", "Haicang Qu"),
        ("350206", "Huli Qu"),
        ("350211", "Jimei Qu"),
        ("350212", "Tongan Qu"),
        ("350213", "Xiangan Qu"),
        ("350300", "Putian Shi"),
        ("350302", "Chengxiang Qu"),
        ("350400", "Sanming Shi"),
        ("350402", "Meilie Qu"),
        ("350500", "Quanzhou Shi"),
        ("350502", "Licheng Qu"),
        ("350503", "Fengze Qu"),
        ("350504", "Luojiang Qu"),
        ("350505", "Quangang Qu"),
        ("350521", "Huian Xian"),
        ("350524", "Anxi Xian"),
        ("350525", "Yongchun Xian"),
        ("350526", "Dehua Xian"),
        ("350527", "Jinmen Xian"),
        ("350581", "Shishi Shi"),
        ("350582", "Jinjiang Shi"),
        ("350583", "Nanan Shi"),
        ("350600", "Zhangzhou Shi"),
        ("350602", "Xiangcheng Qu"),
        ("350700", "Nanping Shi"),
        ("350800", "Longyan Shi"),
        ("350802", "Xinluo Qu"),
        ("350900", "Ningde Shi"),
        ("350902", "Jiaocheng Qu"),
        ("360000", "Jiangxi Sheng"),
        ("360100", "Nanchang Shi"),
        ("360102", "Donghu Qu"),
        ("360700", "Ganzhou Shi"),
        ("370000", "Shandong Sheng"),
        ("370100", "Jinan Shi"),
        ("370102", "Lixia Qu"),
        ("370200", "Qingdao Shi"),
        ("370202", "Shinan Qu"),
        ("370203", "Shibei Qu"),
        ("370212", "Laoshan Qu"),
        ("370600", "Yantai Shi"),
        ("410000", "Henan Sheng"),
        ("410100", "Zhengzhou Shi"),
        ("410102", "Zhongyuan Qu"),
        ("410103", "Erqi Qu"),
        ("410105", "Jinshui Qu"),
        ("410300", "Luoyang Shi"),
        ("420000", "Hubei Sheng"),
        ("420100", "Wuhan Shi"),
        ("420102", "Jiangan Qu"),
        ("420103", "Jianghan Qu"),
        ("420106", "Wuchang Qu"),
        ("420111", "Hongshan Qu"),
        ("420500", "Yichang Shi"),
        ("430000", "Hunan Sheng"),
        ("430100", "Changsha Shi"),
        ("430102", "Furong Qu"),
        ("430103", "Tianxin Qu"),
        ("430104", "Yuelu Qu"),
        ("430200", "Zhuzhou Shi"),
        ("440000", "Guangdong Sheng"),
        ("440100", "Guangzhou Shi"),
        ("440103", "Liwan Qu"),
        ("440104", "Yuexiu Qu"),
        ("440105", "Haizhu Qu"),
        ("440106", "Tianhe Qu"),
        ("440111", "Baiyun Qu"),
        ("440113", "Panyu Qu"),
        ("440300", "Shenzhen Shi"),
        ("440303", "Luohu Qu"),
        ("440304", "Futian Qu"),
        ("440305", "Nanshan Qu"),
        ("440306", "Baoan Qu"),
        ("440307", "Longgang Qu"),
        ("440400", "Zhuhai Shi"),
        ("440600", "Foshan Shi"),
        ("441300", "Huizhou Shi"),
        ("442000", "Zhongshan Shi"),
        ("450000", "Guangxi Zhuangzu Zizhiqu"),
        ("450100", "Nanning Shi"),
        ("450200", "Liuzhou Shi"),
        ("450300", "Guilin Shi"),
        ("460000", "Hainan Sheng"),
        ("460100", "Haikou Shi"),
        ("460200", "Sanya Shi"),
        ("500000", "Chongqing Shi"),
        ("500100", "Shixiaqu"),
        ("500101", "Wanzhou Qu"),
        ("500103", "Yuzhong Qu"),
        ("500105", "Jiangbei Qu"),
        ("500107", "Jiulongpo Qu"),
        ("500200", "Xian"),
        ("510000", "Sichuan Sheng"),
        ("510100", "Chengdu Shi"),
        ("510104", "Jinjiang Qu"),
        ("510105", "Qingyang Qu"),
        ("510106", "Jinniu Qu"),
        ("510107", "Wuhou Qu"),
        ("510108", "Chenghua Qu"),
        ("510700", "Mianyang Shi"),
        ("520000", "Guizhou Sheng"),
        ("520100", "Guiyang Shi"),
        ("520300", "Zunyi Shi"),
        ("530000", "Yunnan Sheng"),
        ("530100", "Kunming Shi"),
        ("530102", "Wuhua Qu"),
        ("532900", "Dali Baizu Zizhizhou"),
        ("540000", "Xizang Zizhiqu"),
        ("540100", "Lhasa Shi"),
        ("610000", "Shaanxi Sheng"),
        ("610100", "Xian Shi"),
        ("610102", "Xincheng Qu"),
        ("610103", "Beilin Qu"),
        ("610104", "Lianhu Qu"),
        ("610113", "Yanta Qu"),
        ("610300", "Baoji Shi"),
        ("620000", "Gansu Sheng"),
        ("620100", "Lanzhou Shi"),
        ("620102", "Chengguan Qu"),
        ("630000", "Qinghai Sheng"),
        ("630100", "Xining Shi"),
        ("640000", "Ningxia Huizu Zizhiqu"),
        ("640100", "Yinchuan Shi"),
        ("650000", "Xinjiang Uygur Zizhiqu"),
        ("650100", "Urumqi Shi"),
        ("650200", "Karamay Shi"),
        ("710000", "Taiwan Sheng"),
        ("810000", "Xianggang Tebiexingzhengqu"),
        ("820000", "Aomen Tebiexingzhengqu"),
    ],
    gender: ["Male", "Female"],
    zodiac: [
        "Ox", "Tiger", "Rabbit", "Dragon", "Snake", "Horse", "Goat", "Monkey", "Rooster", "Dog",
        "Pig", "Rat",
    ],
    constellations: [
        "Aquarius",
        "Pisces",
        "Aries",
        "Taurus",
        "Gemini",
        "Cancer",
        "Leo",
        "Virgo",
        "Libra",
        "Scorpio",
        "Sagittarius",
        "Capricorn",
    ],
};
